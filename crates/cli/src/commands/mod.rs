mod check;
mod list;
mod record;
mod run;

pub use check::check;
pub use list::list;
pub use record::record;
pub use run::run;
