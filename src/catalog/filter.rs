use super::models::Promotion;

/// Project the promotion list through the active brand filter.
///
/// An empty selection keeps every entry; otherwise only promotions whose
/// `brand` equals the selection exactly (case-sensitive) survive. Input
/// order is preserved and the input is never mutated.
pub fn filter_promotions<'a>(promotions: &'a [Promotion], selected: &str) -> Vec<&'a Promotion> {
    if selected.is_empty() {
        promotions.iter().collect()
    } else {
        promotions.iter().filter(|p| p.brand == selected).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn promo(id: i64, brand: &str) -> Promotion {
        Promotion {
            id,
            brand: brand.into(),
            title: format!("Deal {id}"),
            kind: "Flash".into(),
            start_date: "2024-01-01".into(),
            end_date: "2024-01-02".into(),
        }
    }

    #[test]
    fn empty_selection_passes_everything_through() {
        let promos = vec![promo(1, "Acme"), promo(2, "Globex"), promo(3, "Acme")];
        let filtered = filter_promotions(&promos, "");
        assert_eq!(filtered.len(), 3);
        assert_eq!(
            filtered.iter().map(|p| p.id).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn selection_keeps_only_exact_matches_in_order() {
        let promos = vec![promo(1, "Acme"), promo(2, "Globex"), promo(3, "Acme")];
        let filtered = filter_promotions(&promos, "Acme");
        assert_eq!(
            filtered.iter().map(|p| p.id).collect::<Vec<_>>(),
            vec![1, 3]
        );
    }

    #[test]
    fn matching_is_case_sensitive() {
        let promos = vec![promo(1, "Acme")];
        assert!(filter_promotions(&promos, "acme").is_empty());
        assert!(filter_promotions(&promos, " Acme").is_empty());
    }

    #[test]
    fn unknown_selection_yields_empty_not_error() {
        let promos = vec![promo(1, "Acme"), promo(2, "Globex")];
        assert!(filter_promotions(&promos, "Nonexistent").is_empty());
    }

    #[test]
    fn projection_is_idempotent_and_leaves_input_intact() {
        let promos = vec![promo(1, "Acme"), promo(2, "Globex")];
        let snapshot = promos.clone();

        let first: Vec<Promotion> = filter_promotions(&promos, "Acme")
            .into_iter()
            .cloned()
            .collect();
        let second: Vec<Promotion> = filter_promotions(&promos, "Acme")
            .into_iter()
            .cloned()
            .collect();

        assert_eq!(first, second);
        assert_eq!(promos, snapshot);
    }
}
