use std::marker::PhantomData;

use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::error::AdminResult;
use crate::models::{LoginRequest, LoginResponse, RegisterRequest, Teacher};
use crate::resource::{RecordId, Resource};

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// A trait that defines the request-response relationship and metadata for an API endpoint.
pub trait ApiRequest {
    /// JSON body type; `()` for requests without a body.
    type Body: Serialize;
    /// The response type returned by this request.
    type Response;
    /// The HTTP method.
    const METHOD: HttpMethod;
    /// Operation name recorded in error traces.
    const OP: &'static str;

    /// The URL path, relative to the API base URL.
    fn path(&self) -> String;

    fn body(&self) -> Option<&Self::Body> {
        None
    }

    /// Decode a successful (2xx) response body.
    fn decode(body: &str) -> AdminResult<Self::Response>;
}

fn decode_json<T: DeserializeOwned>(body: &str) -> AdminResult<T> {
    Ok(serde_json::from_str(body)?)
}

// =========================================================
// Resource CRUD
// =========================================================

/// `GET /{collection}`
pub struct ListRecords<R>(PhantomData<R>);

impl<R> ListRecords<R> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<R> Default for ListRecords<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Resource> ApiRequest for ListRecords<R> {
    type Body = ();
    type Response = Vec<R>;
    const METHOD: HttpMethod = HttpMethod::Get;
    const OP: &'static str = "api.list";

    fn path(&self) -> String {
        R::collection_path()
    }

    fn decode(body: &str) -> AdminResult<Vec<R>> {
        // 空表在部分后端实现中返回 `null`
        let rows: Option<Vec<R>> = decode_json(body)?;
        Ok(rows.unwrap_or_default())
    }
}

/// `POST /{collection}`
pub struct CreateRecord<R: Resource> {
    pub draft: R::Draft,
}

impl<R: Resource> ApiRequest for CreateRecord<R> {
    type Body = R::Draft;
    type Response = R;
    const METHOD: HttpMethod = HttpMethod::Post;
    const OP: &'static str = "api.create";

    fn path(&self) -> String {
        R::collection_path()
    }

    fn body(&self) -> Option<&R::Draft> {
        Some(&self.draft)
    }

    fn decode(body: &str) -> AdminResult<R> {
        decode_json(body)
    }
}

/// `PUT /{collection}/{id}` with the full record.
pub struct UpdateRecord<R> {
    pub record: R,
}

impl<R: Resource> ApiRequest for UpdateRecord<R> {
    type Body = R;
    type Response = R;
    const METHOD: HttpMethod = HttpMethod::Put;
    const OP: &'static str = "api.update";

    fn path(&self) -> String {
        R::record_path(self.record.id())
    }

    fn body(&self) -> Option<&R> {
        Some(&self.record)
    }

    fn decode(body: &str) -> AdminResult<R> {
        decode_json(body)
    }
}

/// `DELETE /{collection}/{id}`; the response body is ignored.
pub struct DeleteRecord<R> {
    pub id: RecordId,
    _resource: PhantomData<R>,
}

impl<R> DeleteRecord<R> {
    pub fn new(id: RecordId) -> Self {
        Self {
            id,
            _resource: PhantomData,
        }
    }
}

impl<R: Resource> ApiRequest for DeleteRecord<R> {
    type Body = ();
    type Response = ();
    const METHOD: HttpMethod = HttpMethod::Delete;
    const OP: &'static str = "api.delete";

    fn path(&self) -> String {
        R::record_path(self.id)
    }

    fn decode(_body: &str) -> AdminResult<()> {
        Ok(())
    }
}

// =========================================================
// Auth
// =========================================================

/// `POST /users/login`
impl ApiRequest for LoginRequest {
    type Body = LoginRequest;
    type Response = LoginResponse;
    const METHOD: HttpMethod = HttpMethod::Post;
    const OP: &'static str = "api.login";

    fn path(&self) -> String {
        "/users/login".to_string()
    }

    fn body(&self) -> Option<&LoginRequest> {
        Some(self)
    }

    fn decode(body: &str) -> AdminResult<LoginResponse> {
        decode_json(body)
    }
}

/// `POST /users`; success is the status code alone.
impl ApiRequest for RegisterRequest {
    type Body = RegisterRequest;
    type Response = ();
    const METHOD: HttpMethod = HttpMethod::Post;
    const OP: &'static str = "api.register";

    fn path(&self) -> String {
        "/users".to_string()
    }

    fn body(&self) -> Option<&RegisterRequest> {
        Some(self)
    }

    fn decode(_body: &str) -> AdminResult<()> {
        Ok(())
    }
}

// =========================================================
// Teacher search
// =========================================================

/// Filters for `GET /teachers/search`. Empty fields are left out of the
/// query string; name filters match partially on the server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeacherQuery {
    pub first_name: String,
    pub last_name: String,
    pub age: String,
    pub salary: String,
}

impl TeacherQuery {
    fn params(&self) -> [(&'static str, &str); 4] {
        [
            ("firstName", self.first_name.trim()),
            ("lastName", self.last_name.trim()),
            ("age", self.age.trim()),
            ("salary", self.salary.trim()),
        ]
    }

    pub fn is_empty(&self) -> bool {
        self.params().iter().all(|(_, v)| v.is_empty())
    }

    pub fn to_query_string(&self) -> String {
        self.params()
            .iter()
            .filter(|(_, v)| !v.is_empty())
            .map(|(k, v)| format!("{}={}", k, encode_component(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl ApiRequest for TeacherQuery {
    type Body = ();
    type Response = Vec<Teacher>;
    const METHOD: HttpMethod = HttpMethod::Get;
    const OP: &'static str = "api.search";

    fn path(&self) -> String {
        let query = self.to_query_string();
        if query.is_empty() {
            "/teachers/search".to_string()
        } else {
            format!("/teachers/search?{}", query)
        }
    }

    fn decode(body: &str) -> AdminResult<Vec<Teacher>> {
        let rows: Option<Vec<Teacher>> = decode_json(body)?;
        Ok(rows.unwrap_or_default())
    }
}

/// Percent-encode a query component (RFC 3986 unreserved set kept as-is).
pub fn encode_component(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NewSubject, Student, Subject};

    #[test]
    fn test_crud_paths_and_methods() {
        let list = ListRecords::<Student>::new();
        assert_eq!(list.path(), "/students");
        assert_eq!(<ListRecords<Student> as ApiRequest>::METHOD, HttpMethod::Get);

        let create = CreateRecord::<Subject> {
            draft: NewSubject {
                name: "Math".to_string(),
                description: "Algebra".to_string(),
            },
        };
        assert_eq!(create.path(), "/subjects");
        assert!(create.body().is_some());

        let delete = DeleteRecord::<Subject>::new(7);
        assert_eq!(delete.path(), "/subjects/7");
        assert!(delete.body().is_none());
        assert_eq!(<DeleteRecord<Subject> as ApiRequest>::METHOD.as_str(), "DELETE");
    }

    #[test]
    fn test_list_accepts_null() {
        let rows = <ListRecords<Subject> as ApiRequest>::decode("null").unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_list_tolerates_odd_numeric_rows() {
        let body = r#"[
            {"ID": 1, "FirstName": "Ada", "LastName": "L", "Age": null, "Grade": 3.5},
            {"ID": 2, "FirstName": "Bo", "LastName": "K", "Age": 12, "Grade": "7B"}
        ]"#;
        let students = <ListRecords<Student> as ApiRequest>::decode(body).unwrap();
        assert_eq!(students.len(), 2);
        assert_eq!(students[0].age, 0);
        assert_eq!(students[0].grade, "3.5");
        assert_eq!(students[1].age, 12);
        assert_eq!(students[1].grade, "7B");

        let body = r#"[
            {"ID": 3, "FirstName": "Cy", "LastName": "M", "Age": -1, "Salary": 52000.5},
            {"ID": 4, "FirstName": "Di", "LastName": "N", "Age": 40, "Salary": 61000}
        ]"#;
        let teachers = <ListRecords<Teacher> as ApiRequest>::decode(body).unwrap();
        assert_eq!(teachers.len(), 2);
        assert_eq!(teachers[0].age, 0);
        assert_eq!(teachers[0].salary, 52000);
        assert_eq!(teachers[1].salary, 61000);
    }

    #[test]
    fn test_teacher_query_encoding() {
        let query = TeacherQuery {
            first_name: "Ann Marie".to_string(),
            last_name: String::new(),
            age: " 40 ".to_string(),
            salary: String::new(),
        };
        assert!(!query.is_empty());
        assert_eq!(query.path(), "/teachers/search?firstName=Ann%20Marie&age=40");

        assert!(TeacherQuery::default().is_empty());
        assert_eq!(TeacherQuery::default().path(), "/teachers/search");
    }

    #[test]
    fn test_encode_component_utf8() {
        assert_eq!(encode_component("สมชาย"), "%E0%B8%AA%E0%B8%A1%E0%B8%8A%E0%B8%B2%E0%B8%A2");
        assert_eq!(encode_component("a&b=c"), "a%26b%3Dc");
    }
}
