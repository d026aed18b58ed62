use std::path::PathBuf;
use clap::Subcommand;
use crate::config::constants::{DEFAULT_OVERTIME_FACTOR, DEFAULT_PROJECT_STATUS};

#[derive(Subcommand)]
pub enum Commands {
    /// Create a sample configuration file
    Init,
    Login {
        #[clap(short, long)]
        username: String,
        /// Read from HRDESK_PASSWORD when omitted
        #[clap(short, long, env = "HRDESK_PASSWORD", hide_env_values = true)]
        password: String,
    },
    Logout,
    Whoami,
    /// Change the account password
    Password {
        #[clap(long)]
        new: String,
        #[clap(long)]
        confirm: String,
    },
    #[clap(subcommand)]
    Profile(ProfileAction),
    #[clap(subcommand)]
    Attendance(AttendanceAction),
    #[clap(subcommand)]
    Leave(LeaveAction),
    #[clap(subcommand)]
    Overtime(OvertimeAction),
    #[clap(subcommand)]
    Task(TaskAction),
    #[clap(subcommand)]
    Staff(StaffAction),
    #[clap(subcommand)]
    Department(DepartmentAction),
    #[clap(subcommand)]
    Project(ProjectAction),
    #[clap(subcommand)]
    Salary(SalaryAction),
    #[clap(subcommand)]
    Candidate(CandidateAction),
    /// Admin overview: staff count and statistics
    Dashboard,
}

#[derive(Subcommand)]
pub enum ProfileAction {
    Show,
    Update {
        #[clap(long)]
        email: Option<String>,
        #[clap(long)]
        phone: Option<String>,
        #[clap(long)]
        address: Option<String>,
        /// YYYY-MM-DD
        #[clap(long)]
        birthday: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum AttendanceAction {
    Today,
    CheckIn {
        #[clap(short, long)]
        location: Option<String>,
    },
    CheckOut {
        #[clap(short, long)]
        location: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum LeaveAction {
    /// Own leave requests
    Mine,
    /// Every leave request (admin)
    List,
    Show {
        id: i64,
    },
    Request {
        /// YYYY-MM-DD
        #[clap(long)]
        from: String,
        /// YYYY-MM-DD
        #[clap(long)]
        to: String,
        #[clap(long)]
        reason: String,
    },
    Update {
        id: i64,
        #[clap(long)]
        from: String,
        #[clap(long)]
        to: String,
        #[clap(long)]
        reason: String,
    },
    Delete {
        id: i64,
    },
    Review {
        id: i64,
        #[clap(long, conflicts_with = "reject", required_unless_present = "reject")]
        approve: bool,
        #[clap(long)]
        reject: bool,
        #[clap(long, default_value = "")]
        note: String,
    },
}

#[derive(Subcommand)]
pub enum OvertimeAction {
    Mine,
    List,
    Request {
        /// Start, e.g. 2024-05-01T18:00
        #[clap(long)]
        start: String,
        #[clap(long)]
        end: String,
        #[clap(long)]
        hours: f64,
        #[clap(long, default_value_t = DEFAULT_OVERTIME_FACTOR)]
        factor: f64,
        #[clap(long)]
        reason: String,
    },
    Review {
        id: i64,
        #[clap(long, conflicts_with = "reject", required_unless_present = "reject")]
        approve: bool,
        #[clap(long)]
        reject: bool,
    },
}

#[derive(Subcommand)]
pub enum TaskAction {
    Mine,
    List,
    Assign {
        #[clap(long)]
        title: String,
        #[clap(long)]
        description: Option<String>,
        /// Employee id of the assignee
        #[clap(long)]
        assignee: i64,
        /// YYYY-MM-DD
        #[clap(long)]
        due: Option<String>,
    },
    /// Set a task to "Mới giao", "Đang thực hiện" or "Hoàn thành"
    Status {
        id: i64,
        status: String,
        #[clap(long, default_value = "")]
        note: String,
    },
}

#[derive(Subcommand)]
pub enum StaffAction {
    List,
    Show {
        id: i64,
    },
    Add {
        /// Employee record as JSON
        #[clap(long)]
        data: String,
    },
    Update {
        #[clap(long)]
        data: String,
    },
    Delete {
        id: i64,
    },
    AddOt {
        #[clap(long)]
        data: String,
    },
}

#[derive(Subcommand)]
pub enum DepartmentAction {
    List,
    Show {
        id: i64,
    },
    Add {
        #[clap(long)]
        data: String,
    },
    Update {
        #[clap(long)]
        data: String,
    },
    Delete {
        id: i64,
    },
}

#[derive(Subcommand)]
pub enum ProjectAction {
    List,
    Show {
        id: i64,
    },
    Add {
        #[clap(long)]
        name: String,
        /// YYYY-MM-DD
        #[clap(long)]
        start: Option<String>,
        #[clap(long)]
        end: Option<String>,
        #[clap(long, default_value = DEFAULT_PROJECT_STATUS)]
        status: String,
    },
    Update {
        id: i64,
        #[clap(long)]
        name: String,
        #[clap(long)]
        start: Option<String>,
        #[clap(long)]
        end: Option<String>,
        #[clap(long, default_value = DEFAULT_PROJECT_STATUS)]
        status: String,
    },
    Delete {
        id: i64,
    },
}

#[derive(Subcommand)]
pub enum SalaryAction {
    Mine,
    List,
    Calculate {
        #[clap(long)]
        month: u32,
        #[clap(long)]
        year: i32,
    },
    ExportExcel {
        #[clap(long)]
        month: Option<u32>,
        #[clap(long)]
        year: Option<i32>,
        /// Defaults to output.download_dir
        #[clap(short, long)]
        output: Option<PathBuf>,
    },
    ExportPdf {
        #[clap(long)]
        month: Option<u32>,
        #[clap(long)]
        year: Option<i32>,
        #[clap(short, long)]
        output: Option<PathBuf>,
    },
    Import {
        file: PathBuf,
    },
}

#[derive(Subcommand)]
pub enum CandidateAction {
    /// Pipeline grouped by stage
    Board,
    /// Every candidate, including archived ones
    List,
    /// Move a candidate to stage 0 (Mới), 1 (Phỏng vấn) or 2 (Offer)
    Move {
        id: i64,
        #[clap(value_parser = clap::value_parser!(i64).range(0..=2))]
        stage: i64,
    },
    Evaluation {
        /// Evaluation id of the candidate
        id: i64,
    },
    Evaluate {
        /// Evaluation record as JSON; Id 0 creates a new one
        #[clap(long)]
        data: String,
    },
}
