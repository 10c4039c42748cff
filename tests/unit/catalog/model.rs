use super::*;

fn record(id: u32, year: &str) -> ProductRecord {
    ProductRecord {
        id,
        name: format!("Shoe {id}"),
        brand: "Brand".to_string(),
        image_ref: None,
        description: String::new(),
        year: year.to_string(),
        color_scheme: ColorScheme {
            bg: "bg".to_string(),
            accent: "accent".to_string(),
            card: "card".to_string(),
        },
        features: vec![],
    }
}

#[test]
fn builtin_catalog_is_valid_and_ordered() {
    let cat = Catalog::builtin();
    assert_eq!(cat.len(), 5);
    let ids: Vec<u32> = cat.products().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    assert_eq!(cat.at(0).unwrap().name, "Air Jordan 1");
    assert_eq!(cat.get(5).unwrap().name, "Blazer Mid '77");
    assert_eq!(cat.get(4).unwrap().color_scheme.accent, "text-yellow-400");
    assert!(Catalog::new(cat.products().to_vec()).is_ok());
}

#[test]
fn duplicate_ids_are_rejected() {
    let err = Catalog::new(vec![record(1, "1985"), record(1, "1990")]).unwrap_err();
    assert!(err.to_string().contains("duplicate product id 1"));
}

#[test]
fn year_must_be_four_digits() {
    assert!(Catalog::new(vec![record(1, "85")]).is_err());
    assert!(Catalog::new(vec![record(1, "19a5")]).is_err());
    assert!(Catalog::new(vec![record(1, "1985")]).is_ok());
}

#[test]
fn json_uses_site_field_names() {
    let json = r#"[{
        "id": 9,
        "name": "Runner",
        "brand": "Acme",
        "image": "runner.png",
        "description": "Fast.",
        "year": "2001",
        "colorScheme": { "bg": "b", "accent": "a", "card": "c" },
        "features": ["Light"]
    }]"#;
    let cat = Catalog::from_json_reader(json.as_bytes()).unwrap();
    let p = cat.get(9).unwrap();
    assert_eq!(p.image_ref.as_deref(), Some("runner.png"));
    assert_eq!(p.color_scheme.accent, "a");

    let back = serde_json::to_value(&cat).unwrap();
    assert_eq!(back[0]["colorScheme"]["card"], "c");
    assert_eq!(back[0]["image"], "runner.png");
}

#[test]
fn deserialize_enforces_invariants() {
    let json = r#"[
        {"id":1,"name":"A","brand":"B","description":"","year":"2000",
         "colorScheme":{"bg":"","accent":"","card":""},"features":[]},
        {"id":1,"name":"C","brand":"B","description":"","year":"2000",
         "colorScheme":{"bg":"","accent":"","card":""},"features":[]}
    ]"#;
    assert!(serde_json::from_str::<Catalog>(json).is_err());
    assert!(Catalog::from_json_reader(json.as_bytes()).is_err());
}
