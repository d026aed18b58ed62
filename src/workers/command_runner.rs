use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use serde_json::Value;
use crate::config::config_manager::ConfigManager;
use crate::enums::candidate_stage::CandidateStage;
use crate::enums::commands::{
    AttendanceAction, CandidateAction, Commands, DepartmentAction, LeaveAction, OvertimeAction,
    ProfileAction, ProjectAction, SalaryAction, StaffAction, TaskAction,
};
use crate::enums::dashboard_view::DashboardView;
use crate::enums::notice_level::NoticeLevel;
use crate::enums::task_status::TaskStatus;
use crate::errors::{HrError, HrResult};
use crate::helpers::display::{date_to_iso, parse_date};
use crate::helpers::money::parse_money_input;
use crate::logger::record_logger::RecordLogger;
use crate::logger::table_renderer::TableRenderer;
use crate::logger::terminal_notifier::TerminalNotifier;
use crate::services::api_client::ApiClient;
use crate::services::candidate_board::{CandidateBoard, MoveOutcome};
use crate::services::hr::attendance_service::AttendanceService;
use crate::services::hr::auth_service::{validate_password_change, AuthService};
use crate::services::hr::candidate_service::CandidateService;
use crate::services::hr::dashboard_service::DashboardService;
use crate::services::hr::department_service::DepartmentService;
use crate::services::hr::leave_service::LeaveService;
use crate::services::hr::overtime_service::OvertimeService;
use crate::services::hr::profile_service::ProfileService;
use crate::services::hr::project_service::ProjectService;
use crate::services::hr::salary_service::SalaryService;
use crate::services::hr::staff_service::StaffService;
use crate::services::hr::task_service::TaskService;
use crate::services::response_interpreter::ResponseInterpreter;
use crate::services::session_invalidator::SessionInvalidator;
use crate::services::session_store::SessionStore;
use crate::structs::config::config::Config;
use crate::structs::hr::candidate::EvaluationPayload;
use crate::structs::hr::employee::ProfileUpdate;
use crate::structs::hr::leave_request::{LeavePayload, LeaveReview};
use crate::structs::hr::overtime_request::OvertimePayload;
use crate::structs::hr::project::ProjectPayload;
use crate::structs::hr::salary_record::SalaryPeriod;
use crate::structs::hr::task::TaskAssignment;
use crate::structs::session::Session;
use crate::traits::notifier::Notifier;

const APPROVED: &str = "Đã duyệt";
const REJECTED: &str = "Từ chối";

pub struct CommandRunner {
    start_time: Option<Instant>,
    config: Config,
    store: SessionStore,
    notifier: Arc<TerminalNotifier>,
    api: ApiClient,
    records: RecordLogger,
}

impl CommandRunner {
    pub fn new(config: Config) -> HrResult<Self> {
        let store = SessionStore::new(ConfigManager::session_path(&config));
        let notifier = Arc::new(TerminalNotifier::new(config.output.color));
        let navigator = Arc::new(SessionInvalidator::new(store.clone()));
        let interpreter = ResponseInterpreter::new(notifier.clone(), navigator);

        let token = match store.load() {
            Ok(session) => session.map(|s| s.token),
            Err(e) => {
                log::warn!("⚠️ Ignoring unreadable session: {}", e);
                None
            }
        };
        let api = ApiClient::new(&config.api, interpreter)?.with_token(token);
        let records = RecordLogger::new(TableRenderer::new(config.output.color));

        Ok(Self {
            start_time: None,
            config,
            store,
            notifier,
            api,
            records,
        })
    }

    pub async fn run_command(&mut self, command: Commands) -> HrResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init => Self::init_command(),
            Commands::Login { username, password } => self.login_command(&username, &password).await,
            Commands::Logout => self.logout_command(),
            Commands::Whoami => self.whoami_command(),
            Commands::Password { new, confirm } => self.password_command(&new, &confirm),
            Commands::Profile(action) => self.profile_command(action).await,
            Commands::Attendance(action) => self.attendance_command(action).await,
            Commands::Leave(action) => self.leave_command(action).await,
            Commands::Overtime(action) => self.overtime_command(action).await,
            Commands::Task(action) => self.task_command(action).await,
            Commands::Staff(action) => self.staff_command(action).await,
            Commands::Department(action) => self.department_command(action).await,
            Commands::Project(action) => self.project_command(action).await,
            Commands::Salary(action) => self.salary_command(action).await,
            Commands::Candidate(action) => self.candidate_command(action).await,
            Commands::Dashboard => self.dashboard_command().await,
        };

        if let Some(start) = self.start_time {
            log::debug!("⏱️  Command completed in {:.2}s", start.elapsed().as_secs_f64());
        }

        result
    }

    pub fn init_command() -> HrResult<()> {
        log::info!("🚀 Initializing hrdesk configuration...");

        let path = ConfigManager::create_sample_config()?;
        let config = ConfigManager::load_from(&path)?;
        if let Err(problems) = ConfigManager::validate_config(&config) {
            for problem in problems {
                log::warn!("⚠️ {}", problem);
            }
        }

        log::info!("📝 Edit {} to point at your HR backend.", path.display());
        log::info!("🔧 Then run 'hrdesk login'.");
        Ok(())
    }

    fn session(&self) -> HrResult<Session> {
        self.store.require()
    }

    fn notify(&self, message: &str, level: NoticeLevel) {
        self.notifier.notify(message, level);
    }

    async fn login_command(&mut self, username: &str, password: &str) -> HrResult<()> {
        if username.trim().is_empty() || password.is_empty() {
            return Err(HrError::validation_error("username", username, "Username and password are required"));
        }

        let session = AuthService::new(&self.api, &self.store).login(username.trim(), password).await?;
        self.api.set_token(Some(session.token.clone()));
        self.notify(
            &format!("Đăng nhập thành công: {} ({})", session.user.username, session.display_role()),
            NoticeLevel::Success,
        );
        Ok(())
    }

    fn logout_command(&mut self) -> HrResult<()> {
        AuthService::new(&self.api, &self.store).logout()?;
        self.api.set_token(None);
        log::info!("👋 Logged out.");
        Ok(())
    }

    fn whoami_command(&self) -> HrResult<()> {
        match AuthService::new(&self.api, &self.store).current_user()? {
            Some(user) => {
                println!("👤 {}", user.username);
                println!("   Role: {}", user.role.as_deref().unwrap_or("Employee"));
                if let Some(id) = user.id {
                    println!("   Account id: {}", id);
                }
                println!("   API: {}", self.api.base_url());
            }
            None => println!("🔓 Not logged in."),
        }
        Ok(())
    }

    fn password_command(&self, new: &str, confirm: &str) -> HrResult<()> {
        self.session()?;
        validate_password_change(new, confirm)?;
        self.notify("Password changed successfully!", NoticeLevel::Success);
        Ok(())
    }

    async fn profile_command(&self, action: ProfileAction) -> HrResult<()> {
        let session = self.session()?;
        let service = ProfileService::new(&self.api);

        match action {
            ProfileAction::Show => {
                let employee = service.show(&session).await?;
                RecordLogger::print(&self.records.profile(&employee));
            }
            ProfileAction::Update { email, phone, address, birthday } => {
                if let Some(birthday) = &birthday {
                    parse_date("ngaySinh", birthday)?;
                }
                let update = ProfileUpdate {
                    email,
                    so_dien_thoai: phone,
                    dia_chi: address,
                    ngay_sinh: birthday,
                };
                let message = service.update(&session, update).await?;
                self.notify(&message, NoticeLevel::Success);
            }
        }
        Ok(())
    }

    async fn attendance_command(&self, action: AttendanceAction) -> HrResult<()> {
        self.session()?;
        let service = AttendanceService::new(&self.api);

        match action {
            AttendanceAction::Today => {
                let record = service.today().await?;
                RecordLogger::attendance(record.as_ref());
            }
            AttendanceAction::CheckIn { location } => {
                let message = service.check_in(location).await?;
                self.notify(&message, NoticeLevel::Success);
            }
            AttendanceAction::CheckOut { location } => {
                let message = service.check_out(location).await?;
                self.notify(&message, NoticeLevel::Success);
            }
        }
        Ok(())
    }

    async fn leave_command(&self, action: LeaveAction) -> HrResult<()> {
        self.session()?;
        let service = LeaveService::new(&self.api);

        let message = match action {
            LeaveAction::Mine => {
                self.print_list(&service.mine().await?, "leave requests", |r| self.records.leave_requests(r));
                return Ok(());
            }
            LeaveAction::List => {
                self.print_list(&service.list_all().await?, "leave requests", |r| self.records.leave_requests(r));
                return Ok(());
            }
            LeaveAction::Show { id } => {
                match service.by_id(id).await? {
                    Some(request) => RecordLogger::print(&self.records.leave_requests(&[request])),
                    None => RecordLogger::empty("leave request"),
                }
                return Ok(());
            }
            LeaveAction::Request { from, to, reason } => {
                service.create(&LeavePayload { id: None, ngay_bat_dau: from, ngay_ket_thuc: to, ly_do: reason }).await?
            }
            LeaveAction::Update { id, from, to, reason } => {
                service.update(&LeavePayload { id: Some(id), ngay_bat_dau: from, ngay_ket_thuc: to, ly_do: reason }).await?
            }
            LeaveAction::Delete { id } => service.delete(id).await?,
            LeaveAction::Review { id, approve, reject: _, note } => {
                service.approve_reject(&LeaveReview { request_id: id, is_approved: approve, note }).await?
            }
        };

        self.notify(&message, NoticeLevel::Success);
        Ok(())
    }

    async fn overtime_command(&self, action: OvertimeAction) -> HrResult<()> {
        self.session()?;
        let service = OvertimeService::new(&self.api);

        let message = match action {
            OvertimeAction::Mine => {
                self.print_list(&service.mine().await?, "overtime requests", |r| self.records.overtime_requests(r));
                return Ok(());
            }
            OvertimeAction::List => {
                self.print_list(&service.all().await?, "overtime requests", |r| self.records.overtime_requests(r));
                return Ok(());
            }
            OvertimeAction::Request { start, end, hours, factor, reason } => {
                let payload = OvertimePayload {
                    gio_bat_dau: start,
                    gio_ket_thuc: end,
                    so_gio_lam: hours,
                    he_so: factor,
                    ly_do_tang_ca: reason,
                };
                service.request(&payload).await?
            }
            OvertimeAction::Review { id, approve, reject: _ } => {
                service.update_status(id, if approve { APPROVED } else { REJECTED }).await?
            }
        };

        self.notify(&message, NoticeLevel::Success);
        Ok(())
    }

    async fn task_command(&self, action: TaskAction) -> HrResult<()> {
        self.session()?;
        let service = TaskService::new(&self.api);

        let message = match action {
            TaskAction::Mine => {
                self.print_list(&service.mine().await?, "tasks", |t| self.records.tasks(t));
                return Ok(());
            }
            TaskAction::List => {
                self.print_list(&service.all().await?, "tasks", |t| self.records.tasks(t));
                return Ok(());
            }
            TaskAction::Assign { title, description, assignee, due } => {
                if let Some(due) = &due {
                    parse_date("hanHoanThanh", due)?;
                }
                let assignment = TaskAssignment {
                    tieu_de: title,
                    mo_ta: description.filter(|d| !d.trim().is_empty()),
                    id_nguoi_nhan: assignee,
                    han_hoan_thanh: due,
                };
                service.assign(&assignment).await?
            }
            TaskAction::Status { id, status, note } => {
                let status = match status.parse::<TaskStatus>() {
                    Ok(status) => status,
                    Err(message) => {
                        self.notify(&message, NoticeLevel::Warning);
                        return Ok(());
                    }
                };
                service.update_status(id, status, &note).await?
            }
        };

        self.notify(&message, NoticeLevel::Success);
        Ok(())
    }

    async fn staff_command(&self, action: StaffAction) -> HrResult<()> {
        self.session()?;
        let service = StaffService::new(&self.api);

        let message = match action {
            StaffAction::List => {
                self.print_list(&service.list().await?, "employees", |e| self.records.employees(e));
                return Ok(());
            }
            StaffAction::Show { id } => {
                match service.by_id(id).await? {
                    Some(employee) => RecordLogger::print(&self.records.profile(&employee)),
                    None => RecordLogger::empty("employee"),
                }
                return Ok(());
            }
            StaffAction::Add { data } => service.create(&normalize_salary(parse_data(&data)?)).await?,
            StaffAction::Update { data } => service.update(&normalize_salary(parse_data(&data)?)).await?,
            StaffAction::Delete { id } => service.delete(id).await?,
            StaffAction::AddOt { data } => service.add_ot(&parse_data(&data)?).await?,
        };

        self.notify(&message, NoticeLevel::Success);
        Ok(())
    }

    async fn department_command(&self, action: DepartmentAction) -> HrResult<()> {
        self.session()?;
        let service = DepartmentService::new(&self.api);

        let message = match action {
            DepartmentAction::List => {
                self.print_list(&service.list().await?, "departments", |d| self.records.departments(d));
                return Ok(());
            }
            DepartmentAction::Show { id } => {
                match service.by_id(id).await? {
                    Some(department) => RecordLogger::print(&self.records.departments(&[department])),
                    None => RecordLogger::empty("department"),
                }
                return Ok(());
            }
            DepartmentAction::Add { data } => service.create(&parse_data(&data)?).await?,
            DepartmentAction::Update { data } => service.update(&parse_data(&data)?).await?,
            DepartmentAction::Delete { id } => service.delete(id).await?,
        };

        self.notify(&message, NoticeLevel::Success);
        Ok(())
    }

    async fn project_command(&self, action: ProjectAction) -> HrResult<()> {
        self.session()?;
        let service = ProjectService::new(&self.api);

        let message = match action {
            ProjectAction::List => {
                self.print_list(&service.list().await?, "projects", |p| self.records.projects(p));
                return Ok(());
            }
            ProjectAction::Show { id } => {
                match service.by_id(id).await? {
                    Some(project) => RecordLogger::print(&self.records.projects(&[project])),
                    None => RecordLogger::empty("project"),
                }
                return Ok(());
            }
            ProjectAction::Add { name, start, end, status } => {
                service.create(&project_payload(None, name, start, end, status)?).await?
            }
            ProjectAction::Update { id, name, start, end, status } => {
                service.update(&project_payload(Some(id), name, start, end, status)?).await?
            }
            ProjectAction::Delete { id } => service.delete(id).await?,
        };

        self.notify(&message, NoticeLevel::Success);
        Ok(())
    }

    async fn salary_command(&self, action: SalaryAction) -> HrResult<()> {
        self.session()?;
        let service = SalaryService::new(&self.api);

        match action {
            SalaryAction::Mine => {
                self.print_list(&service.mine().await?, "salary records", |s| self.records.salaries(s));
            }
            SalaryAction::List => {
                self.print_list(&service.all().await?, "salary records", |s| self.records.salaries(s));
            }
            SalaryAction::Calculate { month, year } => {
                let message = service.calculate(&SalaryPeriod { thang: month, nam: year }).await?;
                self.notify(&message, NoticeLevel::Success);
            }
            SalaryAction::ExportExcel { month, year, output } => {
                let bytes = service.export_excel(month, year).await?;
                let name = export_file_name("BangLuong", month, year, "xlsx");
                self.write_export(output, &name, &bytes).await?;
                self.notify("Xuất Excel thành công", NoticeLevel::Success);
            }
            SalaryAction::ExportPdf { month, year, output } => {
                let bytes = service.export_pdf(month, year).await?;
                let name = export_file_name("BangLuong_CaNhan", month, year, "pdf");
                self.write_export(output, &name, &bytes).await?;
                self.notify("Xuất PDF thành công", NoticeLevel::Success);
            }
            SalaryAction::Import { file } => {
                let summary = service.import_excel(&file).await?;
                if summary.error_count > 0 {
                    RecordLogger::import_summary(&summary);
                    if summary.success_count > 0 {
                        self.notify(
                            &format!("Import thành công {} bản ghi. Có {} lỗi", summary.success_count, summary.error_count),
                            NoticeLevel::Warning,
                        );
                    } else {
                        self.notify(&format!("Import thất bại: {} lỗi", summary.error_count), NoticeLevel::Danger);
                    }
                } else if summary.success_count > 0 {
                    self.notify(&format!("Import thành công {} bản ghi", summary.success_count), NoticeLevel::Success);
                } else {
                    self.notify(
                        "Không có dữ liệu nào được import. Vui lòng kiểm tra lại file Excel",
                        NoticeLevel::Warning,
                    );
                }
            }
        }
        Ok(())
    }

    async fn write_export(&self, output: Option<PathBuf>, default_name: &str, bytes: &[u8]) -> HrResult<()> {
        let path = output.unwrap_or_else(|| Path::new(&self.config.output.download_dir).join(default_name));
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| HrError::file_error(&parent.display().to_string(), "create directory", &e.to_string()))?;
        }

        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| HrError::file_error(&path.display().to_string(), "write", &e.to_string()))?;
        log::info!("💾 Saved {} ({} bytes)", path.display(), bytes.len());
        Ok(())
    }

    async fn candidate_command(&self, action: CandidateAction) -> HrResult<()> {
        let session = self.session()?;
        let service = CandidateService::new(&self.api);

        match action {
            CandidateAction::Board => {
                let board = CandidateBoard::new(service.list().await?);
                RecordLogger::print(&self.records.board(&board));
            }
            CandidateAction::List => {
                self.print_list(&service.all().await?, "candidates", |c| self.records.candidates(c));
            }
            CandidateAction::Move { id, stage } => {
                let target = CandidateStage::for_candidate(Some(stage));
                let mut board = CandidateBoard::new(service.list().await?);
                if board.locate(id).is_none() {
                    return Err(HrError::validation_error("id", &id.to_string(), "Candidate is not on the board"));
                }

                match board.move_card(id, target, &service, self.notifier.as_ref()).await? {
                    MoveOutcome::Unchanged => log::info!("ℹ️ Candidate {} is already in {}", id, target.title()),
                    MoveOutcome::Moved { from, to } => log::info!("➡️ {} → {}", from.title(), to.title()),
                }
            }
            CandidateAction::Evaluation { id } => match service.evaluation(id).await? {
                Some(evaluation) => RecordLogger::print(&self.records.evaluation(&evaluation)),
                None => RecordLogger::empty("evaluation"),
            },
            CandidateAction::Evaluate { data } => {
                let mut payload: EvaluationPayload = serde_json::from_str(&data)
                    .map_err(|e| HrError::validation_error("data", &data, &e.to_string()))?;
                if payload.ma_nguoi_danh_gia.is_none() {
                    payload.ma_nguoi_danh_gia = session.user.id;
                }
                let message = service.save_evaluation(&payload).await?;
                self.notify(&message, NoticeLevel::Success);
            }
        }
        Ok(())
    }

    async fn dashboard_command(&self) -> HrResult<()> {
        let session = self.session()?;
        match DashboardService::new(&self.api).load(&session.user).await? {
            DashboardView::Admin(summary) => RecordLogger::print(&self.records.dashboard(&summary)),
            DashboardView::Employee(today) => {
                println!("👋 Xin chào, {}!", session.user.username);
                RecordLogger::attendance(today.as_ref());
                if today.is_none() {
                    println!("👉 Run 'hrdesk attendance check-in' to start your work day.");
                }
            }
        }
        Ok(())
    }

    fn print_list<T, F>(&self, items: &[T], what: &str, render: F)
    where
        F: Fn(&[T]) -> comfy_table::Table,
    {
        if items.is_empty() {
            RecordLogger::empty(what);
        } else {
            RecordLogger::print(&render(items));
        }
    }
}

/// Free-form JSON record for admin writes. Must be an object.
fn parse_data(data: &str) -> HrResult<Value> {
    let value: Value = serde_json::from_str(data).map_err(|e| HrError::validation_error("data", data, &e.to_string()))?;
    if !value.is_object() {
        return Err(HrError::validation_error("data", data, "expected a JSON object"));
    }
    Ok(value)
}

/// Staff records may carry the salary as displayed, e.g. `"12.000.000 ₫"`.
fn normalize_salary(mut record: Value) -> Value {
    if let Some(field) = record.get_mut("luongCoBan") {
        if let Some(text) = field.as_str() {
            let digits = parse_money_input(text);
            *field = digits.parse::<u64>().map_or(Value::Null, Value::from);
        }
    }
    record
}

fn project_payload(id: Option<i64>, name: String, start: Option<String>, end: Option<String>, status: String) -> HrResult<ProjectPayload> {
    let to_iso = |field: &str, value: Option<String>| -> HrResult<Option<String>> {
        value
            .filter(|v| !v.trim().is_empty())
            .map(|v| parse_date(field, &v).map(date_to_iso))
            .transpose()
    };

    Ok(ProjectPayload {
        id,
        ten_du_an: name.trim().to_string(),
        ngay_bat_dau: to_iso("NgayBatDau", start)?,
        ngay_ket_thuc: to_iso("NgayKetThuc", end)?,
        trang_thai: status,
    })
}

fn export_file_name(prefix: &str, month: Option<u32>, year: Option<i32>, extension: &str) -> String {
    let month = month.filter(|m| *m != 0).map_or_else(|| "all".to_string(), |m| m.to_string());
    let year = year.filter(|y| *y != 0).map_or_else(|| "all".to_string(), |y| y.to_string());
    format!("{}_{}_{}.{}", prefix, month, year, extension)
}
