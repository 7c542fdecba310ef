//! Built-in demo catalog.

use super::model::{Catalog, MenuItem, Restaurant};
use crate::money::Money;
use crate::profile::Objective::{self, Both, MuscleGain, WeightLoss};

impl Catalog {
    pub fn builtin() -> Self {
        Self::new(vec![
            restaurant(
                ("1", "Fit Gourmet", "Specialised in low carb dishes and lean proteins"),
                "Healthy Food",
                WeightLoss,
                (4.8, "25-35 min", 399),
                &["Low Carb", "Proteins", "Salads"],
                ("12 Flower Street - Downtown", "(11) 99999-9999", "Mon-Sun: 11am to 10pm"),
                vec![
                    item(
                        ("1", "Grilled Salmon with Vegetables", "Grilled salmon fillet with steamed broccoli, zucchini and asparagus"),
                        3290,
                        (380, 35, 8, 22),
                        "Main Courses",
                        WeightLoss,
                    ),
                    item(
                        ("2", "Fit Caesar Salad", "Mixed greens, grilled chicken, cherry tomatoes and light caesar dressing"),
                        2490,
                        (280, 28, 12, 15),
                        "Salads",
                        WeightLoss,
                    ),
                    item(
                        ("3", "Quinoa Bowl", "Quinoa, chickpeas, avocado, tomato and tahini dressing"),
                        2690,
                        (420, 18, 45, 20),
                        "Bowls",
                        Both,
                    ),
                ],
            ),
            restaurant(
                ("2", "Muscle Food", "Protein-rich meals for muscle gain"),
                "High Protein",
                MuscleGain,
                (4.7, "30-40 min", 450),
                &["Whey Protein", "Meats", "Carbohydrates"],
                ("456 Paulista Avenue - Bela Vista", "(11) 88888-8888", "Mon-Sat: 10am to 11pm"),
                vec![
                    item(
                        ("4", "Chicken with Sweet Potato", "Grilled chicken breast (200g) with roasted sweet potato and green salad"),
                        2890,
                        (520, 45, 35, 18),
                        "Main Courses",
                        MuscleGain,
                    ),
                    item(
                        ("5", "Mass Protein Shake", "Whey protein, banana, oats, peanut butter and milk"),
                        1890,
                        (380, 30, 28, 16),
                        "Drinks",
                        MuscleGain,
                    ),
                ],
            ),
            restaurant(
                ("3", "Green Life", "Nutritious vegan and vegetarian options"),
                "Vegan/Vegetarian",
                Both,
                (4.6, "20-30 min", 299),
                &["Vegan", "Organic", "Superfoods"],
                ("78 Garden Lane - Pinheiros", "(11) 77777-7777", "Mon-Sun: 10am to 9pm"),
                vec![
                    item(
                        ("6", "Tofu Power Bowl", "Marinated tofu, brown rice, edamame and roasted vegetables"),
                        2790,
                        (450, 26, 48, 14),
                        "Bowls",
                        Both,
                    ),
                    item(
                        ("7", "Green Detox Juice", "Kale, green apple, ginger and lemon"),
                        1290,
                        (120, 2, 26, 1),
                        "Drinks",
                        WeightLoss,
                    ),
                ],
            ),
            restaurant(
                ("4", "Lean Kitchen", "Balanced and tasty fitness meal boxes"),
                "Fit Meal Boxes",
                WeightLoss,
                (4.9, "35-45 min", 500),
                &["Meal Boxes", "Balanced", "Portion Control"],
                ("9 Harbour Road - Vila Mariana", "(11) 66666-6666", "Mon-Fri: 11am to 8pm"),
                vec![
                    item(
                        ("8", "Turkey Meatballs Box", "Turkey meatballs, cauliflower rice and sauteed greens"),
                        2590,
                        (350, 32, 14, 16),
                        "Meal Boxes",
                        WeightLoss,
                    ),
                    item(
                        ("9", "Fish and Pumpkin Box", "Baked white fish with pumpkin puree and green beans"),
                        2790,
                        (310, 30, 18, 10),
                        "Meal Boxes",
                        WeightLoss,
                    ),
                ],
            ),
            restaurant(
                ("5", "Power Meals", "Complete meals for athletes and strength trainees"),
                "Sports",
                MuscleGain,
                (4.8, "40-50 min", 600),
                &["Athletes", "High Calorie", "Supplements"],
                ("300 Stadium Street - Morumbi", "(11) 55555-5555", "Mon-Sun: 9am to 11pm"),
                vec![
                    item(
                        ("10", "Steak and Rice Plate", "Sirloin steak, white rice, black beans and fried egg"),
                        3990,
                        (820, 58, 72, 30),
                        "Main Courses",
                        MuscleGain,
                    ),
                    item(
                        ("11", "Bulk Pasta", "Wholewheat pasta with ground beef bolognese and parmesan"),
                        3490,
                        (760, 44, 90, 22),
                        "Main Courses",
                        MuscleGain,
                    ),
                ],
            ),
            restaurant(
                ("6", "Balance Bistro", "Varied menu for every fitness goal"),
                "Varied",
                Both,
                (4.5, "25-35 min", 350),
                &["Varied", "Personalised", "Flexible"],
                ("55 Market Square - Moema", "(11) 44444-4444", "Tue-Sun: 12pm to 10pm"),
                vec![
                    item(
                        ("12", "Build Your Own Plate", "Choose a protein, a carb and two vegetables"),
                        2990,
                        (500, 35, 45, 18),
                        "Main Courses",
                        Both,
                    ),
                    item(
                        ("13", "Greek Yogurt Parfait", "Greek yogurt, berries, granola and honey"),
                        1490,
                        (260, 15, 34, 7),
                        "Desserts",
                        Both,
                    ),
                ],
            ),
        ])
    }
}

fn restaurant(
    (id, name, description): (&str, &str, &str),
    category: &str,
    objective: Objective,
    (rating, delivery_time_range, delivery_fee_cents): (f32, &str, u64),
    specialties: &[&str],
    (address, phone, opening_hours): (&str, &str, &str),
    menu: Vec<MenuItem>,
) -> Restaurant {
    Restaurant {
        id: id.into(),
        name: name.into(),
        description: description.into(),
        category: category.into(),
        objective,
        rating,
        delivery_time_range: delivery_time_range.into(),
        delivery_fee: Money::from_cents(delivery_fee_cents),
        specialties: specialties.iter().map(|s| s.to_string()).collect(),
        address: address.into(),
        phone: phone.into(),
        opening_hours: opening_hours.into(),
        menu,
    }
}

fn item(
    (id, name, description): (&str, &str, &str),
    price_cents: u64,
    (calories, protein_grams, carb_grams, fat_grams): (u32, u32, u32, u32),
    category: &str,
    objective: Objective,
) -> MenuItem {
    MenuItem {
        id: id.into(),
        name: name.into(),
        description: description.into(),
        price: Money::from_cents(price_cents),
        calories,
        protein_grams,
        carb_grams,
        fat_grams,
        category: category.into(),
        objective,
    }
}
