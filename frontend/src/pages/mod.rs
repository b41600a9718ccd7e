//! 页面组件，每个路由对应一个

mod login;
mod register;
mod students;
mod subjects;
mod teachers;
mod users;

pub use login::LoginPage;
pub use register::RegisterPage;
pub use students::StudentsPage;
pub use subjects::SubjectsPage;
pub use teachers::TeachersPage;
pub use users::UsersPage;
