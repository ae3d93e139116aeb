use super::error::DomainError;
use super::id::RecordId;
use super::non_empty;

pub const DEFAULT_KIND: &str = "article";
pub const ANONYMOUS_AUTHOR: &str = "匿名用户";

pub(crate) const REQUIRED_FIELDS_MESSAGE: &str = "标题和内容是必填项";
pub(crate) const NOT_FOUND_MESSAGE: &str = "数据项不存在";

const SYSTEM_AUTHOR: &str = "系统管理员";
const UPDATED_CONTENT: &str = "更新后的内容";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataItem {
    pub id: RecordId,
    pub title: String,
    pub kind: String,
    pub content: String,
    pub author: Option<String>,
    pub tags: Option<Vec<String>>,
    pub views: Option<u64>,
    pub likes: Option<u64>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl DataItem {
    /// Summary row as stored in the list table.
    pub(crate) fn summary(id: i64, kind: &str, content: &str, created_at: &str) -> Self {
        let id = RecordId::new(id);
        Self {
            id,
            title: default_title(id),
            kind: kind.to_string(),
            content: content.to_string(),
            author: None,
            tags: None,
            views: None,
            likes: None,
            created_at: Some(created_at.to_string()),
            updated_at: None,
        }
    }

    /// Detailed record returned by single-item lookups.
    pub(crate) fn detailed(id: i64) -> Self {
        let id = RecordId::new(id);
        Self {
            id,
            title: default_title(id),
            kind: DEFAULT_KIND.to_string(),
            content: format!(
                "这是第{id}个数据项的详细内容。这里可以包含更多的信息，比如描述、标签、作者等。"
            ),
            author: Some(SYSTEM_AUTHOR.to_string()),
            tags: Some(vec![
                "技术".to_string(),
                "开发".to_string(),
                "Node.js".to_string(),
            ]),
            views: Some(1250),
            likes: Some(45),
            created_at: Some("2024-01-01".to_string()),
            updated_at: Some("2024-01-15".to_string()),
        }
    }
}

fn default_title(id: RecordId) -> String {
    format!("数据项{id}")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDataItem {
    pub title: String,
    pub kind: Option<String>,
    pub content: String,
    pub author: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl NewDataItem {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        kind: Option<String>,
        author: Option<String>,
        tags: Option<Vec<String>>,
    ) -> Result<Self, DomainError> {
        let title = title.into();
        let content = content.into();
        if title.is_empty() || content.is_empty() {
            return Err(DomainError::Validation {
                message: REQUIRED_FIELDS_MESSAGE,
            });
        }

        Ok(Self {
            title,
            kind: non_empty(kind),
            content,
            author: non_empty(author),
            tags,
        })
    }

    pub(crate) fn into_item(self, id: i64, created_at: String) -> DataItem {
        DataItem {
            id: RecordId::new(id),
            title: self.title,
            kind: self.kind.unwrap_or_else(|| DEFAULT_KIND.to_string()),
            content: self.content,
            author: Some(self.author.unwrap_or_else(|| ANONYMOUS_AUTHOR.to_string())),
            tags: Some(self.tags.unwrap_or_default()),
            views: Some(0),
            likes: Some(0),
            created_at: Some(created_at),
            updated_at: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataItemPatch {
    pub title: Option<String>,
    pub kind: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl DataItemPatch {
    pub(crate) fn apply(self, id: RecordId, updated_at: String) -> DataItem {
        DataItem {
            id,
            title: non_empty(self.title).unwrap_or_else(|| default_title(id)),
            kind: non_empty(self.kind).unwrap_or_else(|| DEFAULT_KIND.to_string()),
            content: non_empty(self.content).unwrap_or_else(|| UPDATED_CONTENT.to_string()),
            author: Some(non_empty(self.author).unwrap_or_else(|| SYSTEM_AUTHOR.to_string())),
            tags: Some(self.tags.unwrap_or_else(|| vec!["技术".to_string()])),
            views: None,
            likes: None,
            created_at: None,
            updated_at: Some(updated_at),
        }
    }
}
