use crate::quantity::{cost::Cost, rate::SquareMeterRate};

quantity!(
    /// Floor area.
    SquareMeters,
    "m²"
);

product!(SquareMeters, SquareMeterRate, Cost);
