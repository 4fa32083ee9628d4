pub mod ancestors;
pub mod promote;
pub mod rollup;
pub mod sort;
pub mod visibility;
pub mod work_order;

pub use promote::{completed_late, days_overdue, is_promoted};
pub use rollup::open_todos_up_to_current_week;
pub use visibility::{Column, tasks_for_week};
pub use work_order::calculate_work_order;
