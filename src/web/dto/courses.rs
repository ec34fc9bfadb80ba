use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::model::entity::Course;
use crate::web::schema::{RecordShape, Shape};

#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CoursesQuery {
    pub categoryids: Vec<i64>,
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct CourseResponse {
    id: i64,
    name: String,
    categoryid: i64,
}

impl From<Course> for CourseResponse {
    fn from(course: Course) -> Self {
        Self {
            id: course.id(),
            name: course.fullname().to_string(),
            categoryid: course.category_id(),
        }
    }
}

pub static COURSES_PARAMETERS: LazyLock<RecordShape> = LazyLock::new(|| {
    RecordShape::new(vec![(
        "categoryids",
        Shape::list("List of category IDs.", Shape::int("Category ID")),
    )])
});

pub static COURSES_RETURNS: LazyLock<Shape> = LazyLock::new(|| {
    Shape::list(
        "List of courses.",
        Shape::record(vec![
            ("id", Shape::int("Course ID")),
            ("name", Shape::text("Course Name")),
            ("categoryid", Shape::int("Course Category ID")),
        ]),
    )
});

#[cfg(test)]
mod test {
    use super::*;
    use crate::web::schema::FieldType;

    #[test]
    fn courses_parameters_declaration() {
        assert_eq!(COURSES_PARAMETERS.len(), 1);

        let list = COURSES_PARAMETERS
            .field("categoryids")
            .and_then(Shape::as_list)
            .unwrap();
        assert_eq!(list.description(), "List of category IDs.");
        assert!(list.required());

        let element = list.element().as_scalar().unwrap();
        assert_eq!(element.field_type(), FieldType::Int);
        assert_eq!(element.description(), "Category ID");
        assert!(element.required());
    }

    #[test]
    fn courses_returns_declaration() {
        let record = COURSES_RETURNS
            .as_list()
            .unwrap()
            .element()
            .as_record()
            .unwrap();
        assert_eq!(record.len(), 3);

        let id = record.field("id").and_then(Shape::as_scalar).unwrap();
        assert_eq!(id.field_type(), FieldType::Int);
        assert_eq!(id.description(), "Course ID");
        assert!(id.required());

        let name = record.field("name").and_then(Shape::as_scalar).unwrap();
        assert_eq!(name.field_type(), FieldType::Text);
        assert_eq!(name.description(), "Course Name");
        assert!(name.required());

        let categoryid = record
            .field("categoryid")
            .and_then(Shape::as_scalar)
            .unwrap();
        assert_eq!(categoryid.field_type(), FieldType::Int);
        assert_eq!(categoryid.description(), "Course Category ID");
        assert!(categoryid.required());
    }

    #[test]
    fn course_response_conforms_to_declaration() {
        let response = vec![CourseResponse {
            id: 1,
            name: "Anatomy 101".to_string(),
            categoryid: 7,
        }];
        let value = serde_json::to_value(&response).unwrap();
        assert!(COURSES_RETURNS.validate(&value).is_ok());
    }
}
