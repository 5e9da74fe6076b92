mod auth_switch;
pub use auth_switch::*;

mod header;
pub use header::*;

mod login;
pub use login::*;

pub mod notify;
pub use notify::Toaster;

mod report_sheet;
pub use report_sheet::*;

mod roster;
pub use roster::*;

mod summary;
pub use summary::*;

mod export_button;
pub use export_button::*;
