quantity!(
    /// Euros.
    Cost,
    "€"
);
