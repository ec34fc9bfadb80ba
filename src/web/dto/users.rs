use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::model::entity::User;
use crate::web::schema::{RecordShape, Shape};

#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UsersQuery {
    pub userids: Vec<i64>,
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct UserMappingResponse {
    id: i64,
    ucid: String,
}

impl From<User> for UserMappingResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id(),
            ucid: user.ucid().to_string(),
        }
    }
}

pub static USERS_PARAMETERS: LazyLock<RecordShape> = LazyLock::new(|| {
    RecordShape::new(vec![(
        "userids",
        Shape::list("List of user IDs.", Shape::int("User ID")),
    )])
});

pub static USERS_RETURNS: LazyLock<Shape> = LazyLock::new(|| {
    Shape::list(
        "List of user mappings.",
        Shape::record(vec![
            ("id", Shape::int("User ID")),
            ("ucid", Shape::text("UC ID")),
        ]),
    )
});

#[cfg(test)]
mod test {
    use super::*;
    use crate::web::schema::FieldType;

    #[test]
    fn users_parameters_declaration() {
        assert_eq!(USERS_PARAMETERS.len(), 1);

        let list = USERS_PARAMETERS
            .field("userids")
            .and_then(Shape::as_list)
            .unwrap();
        assert_eq!(list.description(), "List of user IDs.");
        assert!(list.required());

        let element = list.element().as_scalar().unwrap();
        assert_eq!(element.field_type(), FieldType::Int);
        assert_eq!(element.description(), "User ID");
        assert!(element.required());
    }

    #[test]
    fn users_returns_declaration() {
        let record = USERS_RETURNS
            .as_list()
            .unwrap()
            .element()
            .as_record()
            .unwrap();
        assert_eq!(record.len(), 2);

        let id = record.field("id").and_then(Shape::as_scalar).unwrap();
        assert_eq!(id.field_type(), FieldType::Int);
        assert_eq!(id.description(), "User ID");

        let ucid = record.field("ucid").and_then(Shape::as_scalar).unwrap();
        assert_eq!(ucid.field_type(), FieldType::Text);
        assert_eq!(ucid.description(), "UC ID");
    }

    #[test]
    fn user_mapping_response_conforms_to_declaration() {
        let response = vec![UserMappingResponse {
            id: 12,
            ucid: "029384756".to_string(),
        }];
        let value = serde_json::to_value(&response).unwrap();
        assert!(USERS_RETURNS.validate(&value).is_ok());
    }
}
