use serde::{Deserialize, Serialize};

use crate::error::AdminResult;
use crate::resource::{EditMode, FieldKind, FieldSpec, FormValues, RecordId, Resource};
use crate::serde_helper::{lenient_string, lenient_u32, lenient_u64};

// =========================================================
// 领域模型 (Domain Models)
// =========================================================
//
// 后端以 Go 结构体的导出字段名输出 JSON (`ID`, `FirstName`, ...)，
// 另外还带有 `CreatedAt` 等簿记字段，客户端直接忽略。

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct User {
    #[serde(rename = "ID", alias = "id")]
    pub id: RecordId,
    #[serde(default, alias = "name")]
    pub name: String,
    #[serde(default, alias = "email")]
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Student {
    #[serde(rename = "ID", alias = "id")]
    pub id: RecordId,
    #[serde(default, alias = "first_name", alias = "firstName")]
    pub first_name: String,
    #[serde(default, alias = "last_name", alias = "lastName")]
    pub last_name: String,
    #[serde(default, alias = "age", deserialize_with = "lenient_u32")]
    pub age: u32,
    #[serde(default, alias = "grade", deserialize_with = "lenient_string")]
    pub grade: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NewStudent {
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
    pub grade: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Teacher {
    #[serde(rename = "ID", alias = "id")]
    pub id: RecordId,
    #[serde(default, alias = "first_name", alias = "firstName")]
    pub first_name: String,
    #[serde(default, alias = "last_name", alias = "lastName")]
    pub last_name: String,
    #[serde(default, alias = "age", deserialize_with = "lenient_u32")]
    pub age: u32,
    #[serde(default, alias = "salary", deserialize_with = "lenient_u64")]
    pub salary: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NewTeacher {
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
    pub salary: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Subject {
    #[serde(rename = "ID", alias = "id")]
    pub id: RecordId,
    #[serde(default, alias = "name")]
    pub name: String,
    #[serde(default, alias = "description")]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NewSubject {
    pub name: String,
    pub description: String,
}

// =========================================================
// 认证载荷 (Auth Payloads)
// =========================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// 登录响应，`message == "success"` 即视为成功
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub message: String,
}

impl LoginResponse {
    pub fn is_success(&self) -> bool {
        self.message == crate::LOGIN_SUCCESS_MESSAGE
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    /// 仅做非空校验
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.password.is_empty()
    }
}

// =========================================================
// Resource 实现
// =========================================================

const USER_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("name", "Name", FieldKind::Text, "Enter name"),
    FieldSpec::new("email", "Email", FieldKind::Email, "Enter email"),
];

impl Resource for User {
    type Draft = NewUser;

    const COLLECTION: &'static str = "users";
    const SINGULAR: &'static str = "User";
    const FIELDS: &'static [FieldSpec] = USER_FIELDS;
    const EDIT_MODE: EditMode = EditMode::Inline;

    fn id(&self) -> RecordId {
        self.id
    }

    fn to_form(&self) -> FormValues {
        FormValues::default()
            .with("name", self.name.clone())
            .with("email", self.email.clone())
    }

    fn draft_from_form(form: &FormValues) -> AdminResult<NewUser> {
        form.ensure_complete(USER_FIELDS)?;
        Ok(NewUser {
            name: form.text("name")?,
            email: form.text("email")?,
        })
    }

    fn from_draft(id: RecordId, draft: NewUser) -> Self {
        Self {
            id,
            name: draft.name,
            email: draft.email,
        }
    }
}

const STUDENT_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("firstName", "First Name", FieldKind::Text, "Enter first name"),
    FieldSpec::new("lastName", "Last Name", FieldKind::Text, "Enter last name"),
    FieldSpec::new("age", "Age", FieldKind::Integer, "Enter age"),
    FieldSpec::new("grade", "Grade", FieldKind::Text, "Enter grade"),
];

impl Resource for Student {
    type Draft = NewStudent;

    const COLLECTION: &'static str = "students";
    const SINGULAR: &'static str = "Student";
    const FIELDS: &'static [FieldSpec] = STUDENT_FIELDS;
    const EDIT_MODE: EditMode = EditMode::Inline;

    fn id(&self) -> RecordId {
        self.id
    }

    fn to_form(&self) -> FormValues {
        FormValues::default()
            .with("firstName", self.first_name.clone())
            .with("lastName", self.last_name.clone())
            .with("age", self.age.to_string())
            .with("grade", self.grade.clone())
    }

    fn draft_from_form(form: &FormValues) -> AdminResult<NewStudent> {
        form.ensure_complete(STUDENT_FIELDS)?;
        Ok(NewStudent {
            first_name: form.text("firstName")?,
            last_name: form.text("lastName")?,
            age: form.integer("age", "Age")?,
            grade: form.text("grade")?,
        })
    }

    fn from_draft(id: RecordId, draft: NewStudent) -> Self {
        Self {
            id,
            first_name: draft.first_name,
            last_name: draft.last_name,
            age: draft.age,
            grade: draft.grade,
        }
    }
}

const TEACHER_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("firstName", "First Name", FieldKind::Text, "Enter first name"),
    FieldSpec::new("lastName", "Last Name", FieldKind::Text, "Enter last name"),
    FieldSpec::new("age", "Age", FieldKind::Integer, "Enter age"),
    FieldSpec::new("salary", "Salary", FieldKind::Integer, "Enter salary"),
];

impl Resource for Teacher {
    type Draft = NewTeacher;

    const COLLECTION: &'static str = "teachers";
    const SINGULAR: &'static str = "Teacher";
    const FIELDS: &'static [FieldSpec] = TEACHER_FIELDS;
    const EDIT_MODE: EditMode = EditMode::Modal;

    fn id(&self) -> RecordId {
        self.id
    }

    fn to_form(&self) -> FormValues {
        FormValues::default()
            .with("firstName", self.first_name.clone())
            .with("lastName", self.last_name.clone())
            .with("age", self.age.to_string())
            .with("salary", self.salary.to_string())
    }

    fn draft_from_form(form: &FormValues) -> AdminResult<NewTeacher> {
        form.ensure_complete(TEACHER_FIELDS)?;
        Ok(NewTeacher {
            first_name: form.text("firstName")?,
            last_name: form.text("lastName")?,
            age: form.integer("age", "Age")?,
            salary: form.integer("salary", "Salary")?,
        })
    }

    fn from_draft(id: RecordId, draft: NewTeacher) -> Self {
        Self {
            id,
            first_name: draft.first_name,
            last_name: draft.last_name,
            age: draft.age,
            salary: draft.salary,
        }
    }
}

const SUBJECT_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("name", "Name", FieldKind::Text, "Enter name"),
    FieldSpec::new("description", "Description", FieldKind::Text, "Enter description"),
];

impl Resource for Subject {
    type Draft = NewSubject;

    const COLLECTION: &'static str = "subjects";
    const SINGULAR: &'static str = "Subject";
    const FIELDS: &'static [FieldSpec] = SUBJECT_FIELDS;
    const EDIT_MODE: EditMode = EditMode::Modal;

    fn id(&self) -> RecordId {
        self.id
    }

    fn to_form(&self) -> FormValues {
        FormValues::default()
            .with("name", self.name.clone())
            .with("description", self.description.clone())
    }

    fn draft_from_form(form: &FormValues) -> AdminResult<NewSubject> {
        form.ensure_complete(SUBJECT_FIELDS)?;
        Ok(NewSubject {
            name: form.text("name")?,
            description: form.text("description")?,
        })
    }

    fn from_draft(id: RecordId, draft: NewSubject) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_gorm_student() {
        let body = r#"{
            "ID": 4,
            "CreatedAt": "2024-03-01T10:00:00Z",
            "UpdatedAt": "2024-03-01T10:00:00Z",
            "DeletedAt": null,
            "FirstName": "Somchai",
            "LastName": "Dee",
            "Age": "15",
            "Grade": 10
        }"#;
        let student: Student = serde_json::from_str(body).unwrap();
        assert_eq!(student.id, 4);
        assert_eq!(student.first_name, "Somchai");
        assert_eq!(student.age, 15);
        assert_eq!(student.grade, "10");
    }

    #[test]
    fn test_decode_snake_case_aliases() {
        let body = r#"{"id": 2, "first_name": "Ann", "last_name": "Lee", "age": 40, "salary": 52000}"#;
        let teacher: Teacher = serde_json::from_str(body).unwrap();
        assert_eq!(teacher.id, 2);
        assert_eq!(teacher.last_name, "Lee");
        assert_eq!(teacher.salary, 52000);
    }

    #[test]
    fn test_encode_uses_backend_field_names() {
        let subject = Subject {
            id: 7,
            name: "Math".to_string(),
            description: "Algebra".to_string(),
        };
        let json = serde_json::to_value(&subject).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"ID": 7, "Name": "Math", "Description": "Algebra"})
        );

        let draft = NewTeacher {
            first_name: "Ann".to_string(),
            last_name: "Lee".to_string(),
            age: 40,
            salary: 52000,
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"FirstName": "Ann", "LastName": "Lee", "Age": 40, "Salary": 52000})
        );
    }

    #[test]
    fn test_teacher_form_coerces_numbers() {
        let form = FormValues::blank(Teacher::FIELDS)
            .with("firstName", "Ann")
            .with("lastName", "Lee")
            .with("age", "40")
            .with("salary", "abc");
        let err = Teacher::draft_from_form(&form).unwrap_err();
        assert_eq!(err.message(), "Salary must be a whole number");

        let form = form.with("salary", "52000");
        let draft = Teacher::draft_from_form(&form).unwrap();
        assert_eq!(draft.age, 40);
        assert_eq!(draft.salary, 52000);
    }

    #[test]
    fn test_merge_form_keeps_id() {
        let student = Student {
            id: 9,
            first_name: "A".to_string(),
            last_name: "B".to_string(),
            age: 12,
            grade: "6".to_string(),
        };
        let form = student.to_form().with("grade", "7");
        let merged = student.merge_form(&form).unwrap();
        assert_eq!(merged.id, 9);
        assert_eq!(merged.grade, "7");
        assert_eq!(merged.first_name, "A");
    }

    #[test]
    fn test_login_success_marker() {
        let ok: LoginResponse = serde_json::from_str(r#"{"message":"success"}"#).unwrap();
        assert!(ok.is_success());

        let bad: LoginResponse = serde_json::from_str(r#"{"message":"invalid password"}"#).unwrap();
        assert!(!bad.is_success());

        let empty: LoginResponse = serde_json::from_str("{}").unwrap();
        assert!(!empty.is_success());
    }

    #[test]
    fn test_register_presence() {
        let mut req = RegisterRequest {
            name: "Ann".to_string(),
            email: "ann@school.test".to_string(),
            password: String::new(),
        };
        assert!(!req.is_complete());
        req.password = "pw".to_string();
        assert!(req.is_complete());
        req.name = "  ".to_string();
        assert!(!req.is_complete());
    }
}
