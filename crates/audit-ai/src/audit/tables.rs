use std::collections::BTreeMap;
use std::sync::{Arc, OnceLock};

/// Sparse code → value table with a fallback for codes the form never emits.
#[derive(Debug, Clone, PartialEq)]
pub struct LookupTable {
    values: BTreeMap<u32, f64>,
    default: f64,
}

impl LookupTable {
    /// Builds a table whose codes are the positions of `values`.
    pub fn from_values(values: &[f64], default: f64) -> Self {
        Self {
            values: (0u32..).zip(values.iter().copied()).collect(),
            default,
        }
    }

    pub fn get(&self, code: u32) -> f64 {
        self.values.get(&code).copied().unwrap_or(self.default)
    }

    /// Whether values never decrease as the code grows.
    pub fn is_non_decreasing(&self) -> bool {
        self.values
            .values()
            .zip(self.values.values().skip(1))
            .all(|(current, next)| current <= next)
    }

    fn all_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.values().copied().chain(std::iter::once(self.default))
    }
}

/// Which lookup table a validation failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    RevenueGoal,
    AverageCheck,
    Conversion,
    CostPerLead,
}

impl TableKind {
    pub fn label(self) -> &'static str {
        match self {
            TableKind::RevenueGoal => "revenue goal",
            TableKind::AverageCheck => "average check",
            TableKind::Conversion => "conversion rate",
            TableKind::CostPerLead => "cost per lead",
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TableError {
    #[error("{} table contains a non-finite or negative value ({value})", .table.label())]
    InvalidValue { table: TableKind, value: f64 },
    #[error("{} table contains a zero divisor", .table.label())]
    ZeroDivisor { table: TableKind },
}

/// Numeric configuration consumed by the funnel calculator.
#[derive(Debug, Clone, PartialEq)]
pub struct LookupTables {
    /// Monthly revenue target by answer code.
    pub revenue_goal: LookupTable,
    /// Average order value by answer code.
    pub average_check: LookupTable,
    /// Conversion rate in percentage points by answer code.
    pub conversion: LookupTable,
    /// Cost per lead keyed by niche code.
    pub cost_per_lead: LookupTable,
}

impl LookupTables {
    /// Tables shipped with the quiz.
    pub fn standard() -> Self {
        Self {
            revenue_goal: LookupTable::from_values(
                &[3000.0, 12500.0, 35000.0, 75000.0, 150000.0],
                10000.0,
            ),
            average_check: LookupTable::from_values(&[30.0, 125.0, 350.0, 750.0, 1500.0], 100.0),
            conversion: LookupTable::from_values(&[0.5, 2.0, 4.0, 7.5, 12.0, 2.0], 2.0),
            cost_per_lead: LookupTable::from_values(&[8.0, 25.0, 15.0, 12.0, 20.0, 18.0], 15.0),
        }
    }

    /// Process-wide shared copy of [`LookupTables::standard`].
    pub fn shared() -> Arc<Self> {
        static SHARED: OnceLock<Arc<LookupTables>> = OnceLock::new();
        SHARED
            .get_or_init(|| {
                let tables = Self::standard();
                debug_assert_eq!(tables.validate(), Ok(()), "shipped lookup tables are invalid");
                Arc::new(tables)
            })
            .clone()
    }

    /// Rejects tables that would make the funnel math divide by zero or go negative.
    pub fn validate(&self) -> Result<(), TableError> {
        let tables = [
            (TableKind::RevenueGoal, &self.revenue_goal),
            (TableKind::AverageCheck, &self.average_check),
            (TableKind::Conversion, &self.conversion),
            (TableKind::CostPerLead, &self.cost_per_lead),
        ];

        for (table, lookup) in tables {
            if let Some(value) = lookup
                .all_values()
                .find(|value| !value.is_finite() || *value < 0.0)
            {
                return Err(TableError::InvalidValue { table, value });
            }
        }

        for (table, lookup) in [
            (TableKind::AverageCheck, &self.average_check),
            (TableKind::Conversion, &self.conversion),
        ] {
            if lookup.all_values().any(|value| value == 0.0) {
                return Err(TableError::ZeroDivisor { table });
            }
        }

        Ok(())
    }
}
