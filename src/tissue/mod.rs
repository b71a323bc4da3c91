mod compartment;
mod zhl_values;

pub use compartment::{ambient_pressure, init_compartments, TissueCompartment};
pub use zhl_values::{ZhlRow, COMPARTMENT_COUNT, ZHL_16C_VALUES};
