pub mod certificate;
pub mod color;
pub mod credit;

pub use certificate::RetirementCertificate;
pub use color::{Color, Palette};
pub use credit::{CarbonCredit, CreditStatus};
