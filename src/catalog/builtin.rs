use crate::catalog::model::{ColorScheme, ProductRecord};

fn product(
    id: u32,
    name: &str,
    brand: &str,
    image: &str,
    description: &str,
    year: &str,
    (bg, accent, card): (&str, &str, &str),
    features: [&str; 3],
) -> ProductRecord {
    ProductRecord {
        id,
        name: name.to_owned(),
        brand: brand.to_owned(),
        image_ref: Some(image.to_owned()),
        description: description.to_owned(),
        year: year.to_owned(),
        color_scheme: ColorScheme {
            bg: bg.to_owned(),
            accent: accent.to_owned(),
            card: card.to_owned(),
        },
        features: features.iter().map(|f| (*f).to_owned()).collect(),
    }
}

pub(crate) fn products() -> Vec<ProductRecord> {
    vec![
        product(
            1,
            "Air Jordan 1",
            "Nike",
            "air-jordan-1.png",
            "The sneaker that started it all. Michael Jordan's signature shoe revolutionized \
             basketball footwear and street culture.",
            "1985",
            ("from-red-600 via-black to-gray-900", "text-red-500", "bg-black/40"),
            ["Iconic Design", "Premium Leather", "Air Cushioning"],
        ),
        product(
            2,
            "Superstar",
            "Adidas",
            "superstar.png",
            "From basketball courts to hip-hop stages, the shell-toe classic that defined \
             generations of style.",
            "1969",
            ("from-green-600 via-gray-900 to-black", "text-green-400", "bg-gray-900/40"),
            ["Shell Toe", "Trefoil Logo", "Street Legend"],
        ),
        product(
            3,
            "Air Max 97",
            "Nike",
            "airmax-97.png",
            "Inspired by Japanese bullet trains, these waves of innovation brought full-length \
             Air cushioning to the streets.",
            "1997",
            ("from-blue-600 via-gray-800 to-slate-900", "text-blue-400", "bg-slate-900/40"),
            ["Full-Length Air", "Reflective Waves", "Futuristic Design"],
        ),
        product(
            4,
            "Forum",
            "Adidas",
            "forums-low.png",
            "High-top excellence from the hardwood. The X-strap design became an icon of 80s \
             basketball culture.",
            "1984",
            ("from-yellow-600 via-orange-700 to-gray-900", "text-yellow-400", "bg-orange-900/40"),
            ["High-Top Design", "Ankle X-Strap", "Retro Classic"],
        ),
        product(
            5,
            "Blazer Mid '77",
            "Nike",
            "blazers.png",
            "Vintage basketball aesthetics meet modern street style. The exposed foam tongue and \
             retro swoosh create timeless appeal.",
            "1977",
            ("from-purple-600 via-indigo-800 to-gray-900", "text-purple-400", "bg-indigo-900/40"),
            ["Vintage Style", "Exposed Foam", "Classic Swoosh"],
        ),
    ]
}
