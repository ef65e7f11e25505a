mod chart;
mod footer;
mod header;
mod loading;
mod nav;
mod result_table;
mod roster_tables;
mod stat_card;
mod toast;

pub use chart::StatCharts;
pub use footer::Footer;
pub use header::Header;
pub use loading::Loading;
pub use nav::Sidebar;
pub use result_table::ResultTable;
pub use roster_tables::{ClassTable, CourseTable, StudentTable, TeacherTable};
pub use stat_card::StatCards;
pub use toast::{ToastContainer, use_toasts};
