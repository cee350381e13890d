//! Menu catalog seed
//!
//! Inserts the house menu on first start so the engine is exercisable
//! before the external catalog service has pushed anything. Runs only
//! when the table is empty; never touches an existing catalog.

use chrono::Utc;
use uuid::Uuid;

use super::models::MenuItem;
use super::repository::MenuItemRepository;
use super::repository::RepoResult;
use sqlx::SqlitePool;

struct SeedItem {
    sku: &'static str,
    name: &'static str,
    name_zh: &'static str,
    description: &'static str,
    price: f64,
    category: &'static str,
}

const SEED_MENU: &[SeedItem] = &[
    SeedItem {
        sku: "DS-01",
        name: "Shrimp Dumplings",
        name_zh: "虾饺",
        description: "Har gow with sweet shrimp and bamboo shoots.",
        price: 7.5,
        category: "Dimsum",
    },
    SeedItem {
        sku: "DS-02",
        name: "Pork Siu Mai",
        name_zh: "烧卖",
        description: "Steamed pork dumplings with ginger and scallion.",
        price: 6.75,
        category: "Dimsum",
    },
    SeedItem {
        sku: "DS-03",
        name: "Veggie Spring Rolls",
        name_zh: "素春卷",
        description: "Crisp rolls with cabbage, carrots, and glass noodles.",
        price: 5.25,
        category: "Dimsum",
    },
    SeedItem {
        sku: "LN-01",
        name: "Kung Pao Chicken",
        name_zh: "宫保鸡丁",
        description: "Wok-tossed chicken with peanuts and chili glaze.",
        price: 12.5,
        category: "Lunch",
    },
    SeedItem {
        sku: "LN-02",
        name: "Beef Chow Fun",
        name_zh: "干炒牛河",
        description: "Stir-fried rice noodles with marinated beef and soy.",
        price: 13.25,
        category: "Lunch",
    },
    SeedItem {
        sku: "LN-03",
        name: "Mapo Tofu",
        name_zh: "麻婆豆腐",
        description: "Silken tofu in spicy fermented bean sauce.",
        price: 11.0,
        category: "Lunch",
    },
    SeedItem {
        sku: "DN-01",
        name: "Peking Duck",
        name_zh: "北京烤鸭",
        description: "Crispy duck with pancakes, scallions, and hoisin.",
        price: 28.0,
        category: "Dinner",
    },
    SeedItem {
        sku: "DN-02",
        name: "Seafood Fried Rice",
        name_zh: "海鲜炒饭",
        description: "Jasmine rice with shrimp, scallop, and egg.",
        price: 16.5,
        category: "Dinner",
    },
    SeedItem {
        sku: "DN-03",
        name: "Szechuan Eggplant",
        name_zh: "鱼香茄子",
        description: "Braised eggplant with garlic, basil, and chili.",
        price: 14.25,
        category: "Dinner",
    },
];

/// Seed the menu catalog if it is empty.
pub async fn seed_menu_if_empty(pool: &SqlitePool) -> RepoResult<usize> {
    let repo = MenuItemRepository::new(pool.clone());
    if repo.count().await? > 0 {
        return Ok(0);
    }

    let now = Utc::now();
    for entry in SEED_MENU {
        repo.insert(&MenuItem {
            id: Uuid::new_v4().to_string(),
            sku: entry.sku.to_string(),
            name: entry.name.to_string(),
            name_zh: Some(entry.name_zh.to_string()),
            description: Some(entry.description.to_string()),
            price: entry.price,
            category: entry.category.to_string(),
            is_available: true,
            created_at: now,
        })
        .await?;
    }

    tracing::info!(count = SEED_MENU.len(), "menu catalog seeded");
    Ok(SEED_MENU.len())
}
