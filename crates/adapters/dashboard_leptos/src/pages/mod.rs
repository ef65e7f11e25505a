mod classes;
mod courses;
mod create_result;
mod login;
mod logout;
mod not_found;
mod overview;
mod results;
mod statistics;
mod students;
mod teachers;
mod unauthorized;

pub use classes::Classes;
pub use courses::Courses;
pub use create_result::CreateResult;
pub use login::Login;
pub use logout::Logout;
pub use not_found::NotFound;
pub use overview::Overview;
pub use results::Results;
pub use statistics::Statistics;
pub use students::Students;
pub use teachers::Teachers;
pub use unauthorized::Unauthorized;
