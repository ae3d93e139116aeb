#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataStats {
    pub total_items: u64,
    pub total_views: u64,
    pub total_likes: u64,
    pub type_distribution: TypeDistribution,
    pub recent_activity: Vec<ActivityEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeDistribution {
    pub article: u64,
    pub news: u64,
    pub report: u64,
    pub other: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityEntry {
    pub date: String,
    pub new_items: u64,
    pub views: u64,
}
