use mealplan_domain::{DiscountTable, Meal, PlanKind};

pub struct DiscountService;

impl DiscountService {
    /// Returns the price of `meal` after the discount of the given plan.
    ///
    /// The discount plan uses the location rate (zero for unknown locations);
    /// the non-discount plan uses the table's flat rate everywhere.
    pub fn apply(meal: &Meal, plan_kind: PlanKind, table: &DiscountTable) -> f64 {
        let rate = match plan_kind {
            PlanKind::DiningDollars => table.rate_for(&meal.location),
            PlanKind::ALaCarte => table.flat_rate(),
        };
        meal.price * (1.0 - rate)
    }
}

/// Discount table and plan kind, the pair every price lookup needs.
#[derive(Debug, Clone, Copy)]
pub struct Pricing<'a> {
    pub table: &'a DiscountTable,
    pub plan_kind: PlanKind,
}

impl<'a> Pricing<'a> {
    pub fn new(table: &'a DiscountTable, plan_kind: PlanKind) -> Self {
        Self { table, plan_kind }
    }

    pub fn price_of(&self, meal: &Meal) -> f64 {
        DiscountService::apply(meal, self.plan_kind, self.table)
    }
}
