quantity!(
    /// Euro per kilowatt-hour.
    KilowattHourRate,
    "€/kWh"
);

quantity!(
    /// Euro per cubic meter of gas.
    CubicMeterRate,
    "€/m³"
);

quantity!(
    /// Euro per square meter of floor area.
    SquareMeterRate,
    "€/m²"
);

quantity!(
    /// Euro per kilowatt-peak of installed capacity.
    KilowattPeakRate,
    "€/kWp"
);
