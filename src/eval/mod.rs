mod parser;
mod power;

pub use parser::evaluate;
pub use power::try_power;
