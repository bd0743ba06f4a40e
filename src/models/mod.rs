pub mod employee;
pub mod leave_request;
pub mod system_user;

pub use employee::Employee;
pub use leave_request::{LeaveRequest, LeaveStatus, LeaveType};
pub use system_user::{SystemUser, UserRole, UserStatus};
