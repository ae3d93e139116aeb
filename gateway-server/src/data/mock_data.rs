use std::sync::LazyLock;

use crate::domain::data_item::DataItem;
use crate::domain::stats::{ActivityEntry, DataStats, TypeDistribution};

/// Highest id answered by single-item lookups.
pub const MAX_ITEM_ID: i64 = 5;

static ITEMS: LazyLock<Vec<DataItem>> = LazyLock::new(|| {
    [
        (1, "article", "这是第一篇文章的内容", "2024-01-01"),
        (2, "news", "这是一条新闻", "2024-01-02"),
        (3, "article", "这是第二篇文章的内容", "2024-01-03"),
        (4, "report", "这是一份报告", "2024-01-04"),
        (5, "news", "这是另一条新闻", "2024-01-05"),
    ]
    .into_iter()
    .map(|(id, kind, content, created_at)| DataItem::summary(id, kind, content, created_at))
    .collect()
});

static STATS: LazyLock<DataStats> = LazyLock::new(|| DataStats {
    total_items: 150,
    total_views: 12500,
    total_likes: 850,
    type_distribution: TypeDistribution {
        article: 60,
        news: 45,
        report: 30,
        other: 15,
    },
    recent_activity: [("2024-01-15", 5, 120), ("2024-01-14", 3, 95), ("2024-01-13", 7, 180)]
        .into_iter()
        .map(|(date, new_items, views)| ActivityEntry {
            date: date.to_string(),
            new_items,
            views,
        })
        .collect(),
});

pub fn items() -> &'static [DataItem] {
    &ITEMS
}

pub fn stats() -> &'static DataStats {
    &STATS
}
