use crate::modules::service::application::ports::outgoing::service_repository::NewService;

const DEFAULTS: [(&str, f64, &str, bool, bool); 8] = [
    ("Mobile App Development", 1500.0, "3-4 weeks", true, false),
    ("UI/UX Design", 300.0, "3-5 days", false, false),
    ("API Development", 500.0, "1 week", false, false),
    ("Database Design & Setup", 400.0, "3-5 days", false, false),
    ("E-commerce Integration", 800.0, "1-2 weeks", false, false),
    ("Performance Optimization", 350.0, "2-3 days", false, false),
    ("SEO & Analytics Setup", 250.0, "2-3 days", false, false),
    ("Monthly Maintenance", 200.0, "Ongoing", false, true),
];

/// Catalogue stored the first time the services list is read while empty.
pub fn default_services() -> Vec<NewService> {
    DEFAULTS
        .iter()
        .map(
            |&(name, price_usd, turnaround, is_starting_price, is_monthly)| NewService {
                name: name.to_string(),
                price_usd,
                turnaround: turnaround.to_string(),
                is_starting_price,
                is_monthly,
            },
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogue_has_eight_priced_entries() {
        let services = default_services();

        assert_eq!(services.len(), 8);
        assert!(services.iter().all(|s| s.price_usd > 0.0));
        assert!(services[0].is_starting_price);
        assert!(services[7].is_monthly);
        assert_eq!(services[7].turnaround, "Ongoing");
    }
}
