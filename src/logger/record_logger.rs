use comfy_table::{Cell, Table};
use crate::enums::candidate_stage::CandidateStage;
use crate::helpers::display::{date_part, or_dash, time_part};
use crate::helpers::money::{format_optional_vnd, format_vnd};
use crate::logger::table_renderer::TableRenderer;
use crate::services::candidate_board::CandidateBoard;
use crate::structs::hr::attendance_record::AttendanceRecord;
use crate::structs::hr::candidate::{Candidate, Evaluation};
use crate::structs::hr::dashboard_stats::DashboardSummary;
use crate::structs::hr::department::Department;
use crate::structs::hr::employee::Employee;
use crate::structs::hr::leave_request::LeaveRequest;
use crate::structs::hr::overtime_request::OvertimeRequest;
use crate::structs::hr::project::Project;
use crate::structs::hr::salary_record::{ImportSummary, SalaryRecord};
use crate::structs::hr::task::Task;

fn id_cell(id: Option<i64>) -> Cell {
    Cell::new(id.map_or_else(|| "-".to_string(), |id| id.to_string()))
}

fn text(value: Option<&String>) -> Cell {
    Cell::new(or_dash(value.map(String::as_str)))
}

fn date(value: Option<&String>) -> Cell {
    Cell::new(date_part(value.map(String::as_str)))
}

fn number(value: Option<f64>) -> Cell {
    Cell::new(value.map_or_else(|| "-".to_string(), |v| v.to_string()))
}

/// Terminal views of backend records.
pub struct RecordLogger {
    renderer: TableRenderer,
}

impl RecordLogger {
    pub fn new(renderer: TableRenderer) -> Self {
        Self { renderer }
    }

    pub fn print(table: &Table) {
        println!("{}", table);
    }

    pub fn empty(what: &str) {
        println!("📭 No {} found.", what);
    }

    pub fn employees(&self, employees: &[Employee]) -> Table {
        let mut table = self.renderer.table(["ID", "Họ tên", "Email", "Điện thoại", "Chức vụ", "Phòng ban"]);
        for e in employees {
            table.add_row(vec![
                id_cell(e.id),
                text(e.ho_ten.as_ref()),
                text(e.email.as_ref()),
                text(e.so_dien_thoai.as_ref()),
                text(e.chuc_vu.as_ref()),
                text(e.ten_phong_ban.as_ref()),
            ]);
        }
        table
    }

    pub fn profile(&self, employee: &Employee) -> Table {
        let mut table = self.renderer.table(["Field", "Value"]);
        let rows = [
            ("Họ tên", employee.ho_ten.as_ref()),
            ("Email", employee.email.as_ref()),
            ("Số điện thoại", employee.so_dien_thoai.as_ref()),
            ("Địa chỉ", employee.dia_chi.as_ref()),
            ("Chức vụ", employee.chuc_vu.as_ref()),
            ("Phòng ban", employee.ten_phong_ban.as_ref()),
        ];
        for (label, value) in rows {
            table.add_row(vec![Cell::new(label), text(value)]);
        }
        table.add_row(vec![Cell::new("Ngày sinh"), date(employee.ngay_sinh.as_ref())]);
        table
    }

    pub fn departments(&self, departments: &[Department]) -> Table {
        let mut table = self.renderer.table(["ID", "Tên phòng ban", "Mô tả"]);
        for d in departments {
            table.add_row(vec![id_cell(d.id), text(d.ten_phong_ban.as_ref()), text(d.mo_ta.as_ref())]);
        }
        table
    }

    pub fn projects(&self, projects: &[Project]) -> Table {
        let mut table = self.renderer.table(["ID", "Tên dự án", "Bắt đầu", "Kết thúc", "Trạng thái"]);
        for p in projects {
            table.add_row(vec![
                id_cell(p.id),
                text(p.ten_du_an.as_ref()),
                date(p.ngay_bat_dau.as_ref()),
                date(p.ngay_ket_thuc.as_ref()),
                self.renderer.badge(p.trang_thai.as_deref()),
            ]);
        }
        table
    }

    pub fn leave_requests(&self, requests: &[LeaveRequest]) -> Table {
        let mut table = self.renderer.table(["ID", "Nhân viên", "Từ ngày", "Đến ngày", "Lý do", "Trạng thái", "Người duyệt"]);
        for r in requests {
            table.add_row(vec![
                id_cell(r.id),
                text(r.ho_ten.as_ref()),
                date(r.ngay_bat_dau.as_ref()),
                date(r.ngay_ket_thuc.as_ref()),
                text(r.ly_do.as_ref()),
                self.renderer.badge(r.trang_thai.as_deref()),
                text(r.nguoi_duyet.as_ref()),
            ]);
        }
        table
    }

    pub fn overtime_requests(&self, requests: &[OvertimeRequest]) -> Table {
        let mut table = self.renderer.table(["ID", "Nhân viên", "Ngày", "Giờ", "Số giờ", "Hệ số", "Lý do", "Trạng thái"]);
        for r in requests {
            let start = time_part(r.gio_bat_dau.as_deref()).unwrap_or_else(|| "-".to_string());
            let end = time_part(r.gio_ket_thuc.as_deref()).unwrap_or_else(|| "-".to_string());
            table.add_row(vec![
                id_cell(r.id),
                text(r.ho_ten.as_ref()),
                date(r.ngay_tang_ca.as_ref().or(r.gio_bat_dau.as_ref())),
                Cell::new(format!("{} - {}", start, end)),
                number(r.so_gio_lam),
                number(r.he_so),
                text(r.ly_do_tang_ca.as_ref()),
                self.renderer.badge(r.trang_thai.as_deref()),
            ]);
        }
        table
    }

    pub fn tasks(&self, tasks: &[Task]) -> Table {
        let mut table = self.renderer.table(["ID", "Tiêu đề", "Người giao", "Người nhận", "Hạn", "Trạng thái"]);
        for t in tasks {
            table.add_row(vec![
                id_cell(t.id),
                text(t.tieu_de.as_ref()),
                text(t.nguoi_giao.as_ref()),
                text(t.nguoi_nhan.as_ref()),
                date(t.han_hoan_thanh.as_ref()),
                self.renderer.badge(t.trang_thai.as_deref()),
            ]);
        }
        table
    }

    pub fn salaries(&self, records: &[SalaryRecord]) -> Table {
        let mut table = self.renderer.table([
            "Nhân viên", "Kỳ", "Lương cơ bản", "Ngày công", "Thưởng", "Phụ cấp", "Khấu trừ", "Thực lĩnh",
        ]);
        for s in records {
            let period = match (s.thang, s.nam) {
                (Some(m), Some(y)) => format!("{:02}/{}", m, y),
                _ => "-".to_string(),
            };
            table.add_row(vec![
                text(s.nhan_vien.as_ref()),
                Cell::new(period),
                Cell::new(format_optional_vnd(s.luong_co_ban)),
                number(s.so_ngay_cong),
                Cell::new(format_optional_vnd(s.thuong)),
                Cell::new(format_optional_vnd(s.phu_cap)),
                Cell::new(format_optional_vnd(s.khau_tru)),
                Cell::new(format_optional_vnd(s.tong_luong)),
            ]);
        }
        table
    }

    pub fn attendance(record: Option<&AttendanceRecord>) {
        let Some(record) = record else {
            println!("🕘 Not checked in today.");
            return;
        };

        let check_in = time_part(record.gio_vao.as_deref()).unwrap_or_else(|| "-".to_string());
        println!("🕘 Checked in at {}", check_in);
        match time_part(record.gio_ra.as_deref()) {
            Some(check_out) => println!("🏁 Checked out at {}", check_out),
            None => println!("⏳ Not checked out yet."),
        }
        if let Some(location) = record.vi_tri.as_deref().filter(|l| !l.is_empty()) {
            println!("📍 {}", location);
        }
    }

    pub fn candidates(&self, candidates: &[Candidate]) -> Table {
        let mut table = self.renderer.table(["ID", "Họ tên", "Email", "Vị trí", "Ngày nộp", "Giai đoạn"]);
        for c in candidates {
            table.add_row(vec![
                Cell::new(c.id),
                text(c.ho_ten.as_ref()),
                text(c.email.as_ref()),
                text(c.vi_tri_ung_tuyen.as_ref()),
                date(c.ngay_nop_ho_so.as_ref()),
                Cell::new(c.stage().title()),
            ]);
        }
        table
    }

    /// One column per stage, cards listed top to bottom.
    pub fn board(&self, board: &CandidateBoard) -> Table {
        let headers: Vec<String> = board
            .columns()
            .iter()
            .map(|column| format!("{} ({})", column.stage.title(), column.cards.len()))
            .collect();
        let mut table = self.renderer.table(headers);

        let depth = board.columns().iter().map(|column| column.cards.len()).max().unwrap_or(0);
        for row in 0..depth {
            let cells: Vec<Cell> = CandidateStage::ALL
                .iter()
                .map(|stage| {
                    board.column(*stage).cards.get(row).map_or_else(
                        || Cell::new(""),
                        |card| {
                            Cell::new(format!(
                                "#{} {}\n{}",
                                card.id,
                                or_dash(card.ho_ten.as_deref()),
                                or_dash(card.vi_tri_ung_tuyen.as_deref())
                            ))
                        },
                    )
                })
                .collect();
            table.add_row(cells);
        }
        table
    }

    pub fn evaluation(&self, evaluation: &Evaluation) -> Table {
        let mut table = self.renderer.table(["Field", "Value"]);
        let result = match evaluation.ket_qua {
            Some(true) => "Đạt",
            Some(false) => "Không đạt",
            None => "-",
        };
        table.add_row(vec![Cell::new("Vòng phỏng vấn"), text(evaluation.vong_phong_van.as_ref())]);
        table.add_row(vec![Cell::new("Nhận xét chuyên môn"), text(evaluation.nhan_xet_chuyen_mon.as_ref())]);
        table.add_row(vec![Cell::new("Điểm số"), number(evaluation.diem_so)]);
        table.add_row(vec![Cell::new("Kết quả"), Cell::new(result)]);
        table.add_row(vec![Cell::new("Ngày đánh giá"), date(evaluation.ngay_danh_gia.as_ref())]);
        table
    }

    pub fn import_summary(summary: &ImportSummary) {
        println!("📥 Import kết quả:");
        println!("   - Thành công: {} bản ghi", summary.success_count);
        println!("   - Lỗi: {} bản ghi", summary.error_count);
        for line in summary.error_details() {
            println!("     {}", line);
        }
    }

    pub fn dashboard(&self, summary: &DashboardSummary) -> Table {
        let mut table = self.renderer.table(["Chỉ số", "Giá trị"]);
        table.add_row(vec![Cell::new("Tổng nhân viên"), Cell::new(summary.total_staff)]);
        table.add_row(vec![Cell::new("Tháng có bảng lương"), Cell::new(summary.salary_months())]);
        table.add_row(vec![Cell::new("Công việc"), Cell::new(summary.open_tasks())]);

        if let Some(stats) = &summary.stats {
            for month in &stats.salary_by_month {
                let label = match (month.thang, month.nam) {
                    (Some(m), Some(y)) => format!("Lương {:02}/{}", m, y),
                    _ => "Lương".to_string(),
                };
                table.add_row(vec![Cell::new(label), Cell::new(format_vnd(month.tong_luong.unwrap_or(0.0)))]);
            }
            for day in &stats.attendance_last7_days {
                table.add_row(vec![
                    Cell::new(format!("Chấm công {}", date_part(day.ngay.as_deref()))),
                    Cell::new(format!("{}/{} đúng giờ", day.dung_gio.unwrap_or(0), day.tong.unwrap_or(0))),
                ]);
            }
            for status in &stats.task_status {
                table.add_row(vec![
                    self.renderer.badge(status.trang_thai.as_deref()),
                    Cell::new(status.so_luong.unwrap_or(0)),
                ]);
            }
            for ot in &stats.overtime_by_employee {
                table.add_row(vec![
                    Cell::new(format!("OT {}", or_dash(ot.ten_nhan_vien.as_deref()))),
                    Cell::new(format!("{} giờ", ot.tong_gio_ot.unwrap_or(0.0))),
                ]);
            }
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logger() -> RecordLogger {
        RecordLogger::new(TableRenderer::with_width(false, Some(120)))
    }

    #[test]
    fn salary_table_formats_money() {
        let record = SalaryRecord {
            nhan_vien: Some("Nguyễn Văn A".to_string()),
            thang: Some(3),
            nam: Some(2024),
            tong_luong: Some(12_500_000.0),
            ..SalaryRecord::default()
        };
        let output = logger().salaries(&[record]).to_string();
        assert!(output.contains("03/2024"));
        assert!(output.contains("12.500.000 ₫"));
    }

    #[test]
    fn board_lists_cards_under_their_stage() {
        let board = CandidateBoard::new(vec![
            Candidate { id: 7, ho_ten: Some("Lê Văn C".to_string()), trang_thai_hien_tai: Some(2), ..Candidate::default() },
        ]);
        let output = logger().board(&board).to_string();
        assert!(output.contains("Offer (1)"));
        assert!(output.contains("Mới (0)"));
        assert!(output.contains("#7 Lê Văn C"));
    }
}
