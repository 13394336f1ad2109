//! Seeded catalog records.
//!
//! The storefront ships with a fixed product list; nothing here is mutated at
//! runtime.

use jewelcraft_core::{
    Category, Material, MaterialKind, Product, ProductId, Seller, SellerId, SellerSummary,
    Subcategory, Sustainability,
};
use rust_decimal::Decimal;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

/// Rating with one decimal place (e.g. `rating(48)` is 4.8).
fn rating(tenths: i64) -> Decimal {
    Decimal::new(tenths, 1)
}

fn seller_summary(id: i32, name: &str, tenths: i64) -> SellerSummary {
    SellerSummary {
        id: SellerId::new(id),
        name: name.to_string(),
        rating: rating(tenths),
        verified: true,
    }
}

fn sustainability(
    recycled_metal: bool,
    ethical_stones: bool,
    certification: &str,
    carbon_neutral: bool,
) -> Sustainability {
    Sustainability {
        recycled_metal,
        ethical_stones,
        certification: Some(certification.to_string()),
        carbon_neutral,
    }
}

pub(super) fn products() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new(1),
            name: "Diamond Solitaire Ring".to_string(),
            category: "rings".to_string(),
            subcategory: "engagement".to_string(),
            price: Decimal::new(2500, 0),
            original_price: Decimal::new(3000, 0),
            images: strings(&["/images/ring1.jpg", "/images/ring1-2.jpg"]),
            materials: strings(&["14k White Gold", "1ct Diamond"]),
            description: "Classic solitaire engagement ring with brilliant cut diamond".to_string(),
            rating: rating(48),
            review_count: 156,
            seller: seller_summary(1, "Diamond Dreams", 49),
            sustainability: sustainability(true, true, "Responsible Jewelry Council", false),
            customizable: true,
            in_stock: true,
            weight: "3.2g".to_string(),
            dimensions: "6mm band width".to_string(),
        },
        Product {
            id: ProductId::new(2),
            name: "Emerald Tennis Bracelet".to_string(),
            category: "bracelets".to_string(),
            subcategory: "tennis".to_string(),
            price: Decimal::new(1800, 0),
            original_price: Decimal::new(2200, 0),
            images: strings(&["/images/bracelet1.jpg", "/images/bracelet1-2.jpg"]),
            materials: strings(&["18k Yellow Gold", "Emerald Stones"]),
            description: "Elegant tennis bracelet with natural emerald stones".to_string(),
            rating: rating(47),
            review_count: 89,
            seller: seller_summary(2, "Emerald Elegance", 48),
            sustainability: sustainability(false, true, "Fair Trade Gold", true),
            customizable: true,
            in_stock: true,
            weight: "12.5g".to_string(),
            dimensions: "7 inches length".to_string(),
        },
        Product {
            id: ProductId::new(3),
            name: "Pearl Drop Earrings".to_string(),
            category: "earrings".to_string(),
            subcategory: "drops".to_string(),
            price: Decimal::new(450, 0),
            original_price: Decimal::new(550, 0),
            images: strings(&["/images/earrings1.jpg", "/images/earrings1-2.jpg"]),
            materials: strings(&["Sterling Silver", "Freshwater Pearls"]),
            description: "Classic pearl drop earrings with sterling silver hooks".to_string(),
            rating: rating(46),
            review_count: 203,
            seller: seller_summary(3, "Pearl Paradise", 47),
            sustainability: sustainability(true, true, "Sustainable Pearl Initiative", true),
            customizable: false,
            in_stock: true,
            weight: "4.8g".to_string(),
            dimensions: "2.5cm drop length".to_string(),
        },
        Product {
            id: ProductId::new(4),
            name: "Sapphire Pendant Necklace".to_string(),
            category: "necklaces".to_string(),
            subcategory: "pendants".to_string(),
            price: Decimal::new(980, 0),
            original_price: Decimal::new(1200, 0),
            images: strings(&["/images/necklace1.jpg", "/images/necklace1-2.jpg"]),
            materials: strings(&["14k Rose Gold", "Blue Sapphire"]),
            description: "Delicate sapphire pendant on rose gold chain".to_string(),
            rating: rating(49),
            review_count: 134,
            seller: seller_summary(4, "Sapphire Sublime", 49),
            sustainability: sustainability(true, true, "Responsible Jewelry Council", false),
            customizable: true,
            in_stock: true,
            weight: "6.2g".to_string(),
            dimensions: "18 inch chain".to_string(),
        },
        Product {
            id: ProductId::new(5),
            name: "Ruby Statement Ring".to_string(),
            category: "rings".to_string(),
            subcategory: "statement".to_string(),
            price: Decimal::new(3200, 0),
            original_price: Decimal::new(3800, 0),
            images: strings(&["/images/ring2.jpg", "/images/ring2-2.jpg"]),
            materials: strings(&["Platinum", "2ct Ruby", "Diamond Accents"]),
            description: "Bold statement ring with central ruby and diamond accents".to_string(),
            rating: rating(48),
            review_count: 67,
            seller: seller_summary(5, "Ruby Royalty", 48),
            sustainability: sustainability(false, true, "Kimberley Process", false),
            customizable: true,
            in_stock: false,
            weight: "8.5g".to_string(),
            dimensions: "12mm face width".to_string(),
        },
    ]
}

fn category(id: &str, name: &str, subcategories: &[(&str, &str)]) -> Category {
    Category {
        id: id.to_string(),
        name: name.to_string(),
        image: format!("/images/category-{id}.jpg"),
        subcategories: subcategories
            .iter()
            .map(|(id, name)| Subcategory {
                id: (*id).to_string(),
                name: (*name).to_string(),
            })
            .collect(),
    }
}

pub(super) fn categories() -> Vec<Category> {
    vec![
        category(
            "rings",
            "Rings",
            &[
                ("engagement", "Engagement"),
                ("wedding", "Wedding"),
                ("statement", "Statement"),
                ("eternity", "Eternity"),
                ("cocktail", "Cocktail"),
            ],
        ),
        category(
            "necklaces",
            "Necklaces",
            &[
                ("pendants", "Pendants"),
                ("chains", "Chains"),
                ("chokers", "Chokers"),
                ("statement", "Statement"),
                ("lockets", "Lockets"),
            ],
        ),
        category(
            "earrings",
            "Earrings",
            &[
                ("studs", "Studs"),
                ("drops", "Drops"),
                ("hoops", "Hoops"),
                ("chandeliers", "Chandeliers"),
                ("climbers", "Climbers"),
            ],
        ),
        category(
            "bracelets",
            "Bracelets",
            &[
                ("tennis", "Tennis"),
                ("bangles", "Bangles"),
                ("chain", "Chain"),
                ("charm", "Charm"),
                ("cuff", "Cuff"),
            ],
        ),
        category(
            "watches",
            "Watches",
            &[
                ("luxury", "Luxury"),
                ("sport", "Sport"),
                ("classic", "Classic"),
                ("smart", "Smart"),
                ("vintage", "Vintage"),
            ],
        ),
    ]
}

fn metal(id: &str, name: &str, price_per_gram: Decimal, colors: &[&str], sustainable: bool) -> Material {
    Material {
        id: id.to_string(),
        name: name.to_string(),
        kind: MaterialKind::Metal {
            price_per_gram,
            colors: strings(colors),
            sustainable,
        },
    }
}

fn gemstone(id: &str, name: &str, price_per_carat: i64) -> Material {
    Material {
        id: id.to_string(),
        name: name.to_string(),
        kind: MaterialKind::Gemstone {
            price_per_carat: Decimal::new(price_per_carat, 0),
            ethical: true,
        },
    }
}

pub(super) fn materials() -> Vec<Material> {
    let gold_colors = ["yellow", "white", "rose"];
    vec![
        metal("gold-14k", "14K Gold", Decimal::new(65, 0), &gold_colors, false),
        metal("gold-18k", "18K Gold", Decimal::new(85, 0), &gold_colors, false),
        metal("platinum", "Platinum", Decimal::new(120, 0), &["white"], false),
        metal(
            "silver-sterling",
            "Sterling Silver",
            Decimal::new(25, 1),
            &["silver"],
            true,
        ),
        gemstone("diamond", "Diamond", 5000),
        gemstone("ruby", "Ruby", 3000),
        gemstone("sapphire", "Sapphire", 2500),
        gemstone("emerald", "Emerald", 2800),
        gemstone("pearl", "Pearl", 800),
    ]
}

pub(super) fn sellers() -> Vec<Seller> {
    vec![
        Seller {
            id: SellerId::new(1),
            name: "Diamond Dreams".to_string(),
            rating: rating(49),
            review_count: 1205,
            verified: true,
            location: "New York, NY".to_string(),
            specialties: strings(&["Engagement Rings", "Diamond Jewelry"]),
            established_year: 1995,
            certifications: strings(&["GIA", "RJC"]),
        },
        Seller {
            id: SellerId::new(2),
            name: "Emerald Elegance".to_string(),
            rating: rating(48),
            review_count: 892,
            verified: true,
            location: "Los Angeles, CA".to_string(),
            specialties: strings(&["Colored Gemstones", "Custom Design"]),
            established_year: 2003,
            certifications: strings(&["AGTA", "Fair Trade"]),
        },
        Seller {
            id: SellerId::new(3),
            name: "Pearl Paradise".to_string(),
            rating: rating(47),
            review_count: 654,
            verified: true,
            location: "Miami, FL".to_string(),
            specialties: strings(&["Pearls", "Bridal Jewelry"]),
            established_year: 1988,
            certifications: strings(&["SPI", "RJC"]),
        },
    ]
}
