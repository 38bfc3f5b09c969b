pub mod pricing_plans;
