//! 商品实体

use derive_more::{Display, From};
use serde::{Deserialize, Serialize};
use vend_ports::Entity;

/// 商品 ID
///
/// 数据库自增主键，创建后不可变。
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display, From,
)]
#[display("{_0}")]
pub struct ProductId(pub i64);

/// 商品
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// 主键
    pub id: ProductId,
    /// 标题
    pub title: String,
    /// 描述
    pub description: String,
    /// 价格（约定非负，不做强校验）
    pub price: f64,
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// 新建商品载荷
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProduct {
    pub title: String,
    pub description: String,
    pub price: f64,
}

/// 商品更新补丁
///
/// 缺省字段保持原值，空补丁等价于读取当前记录。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_id_serializes_as_number() {
        let product = Product {
            id: ProductId(42),
            title: "x".to_string(),
            description: "y".to_string(),
            price: 1.5,
        };
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["id"], 42);
        assert_eq!(json["price"], 1.5);
    }

    #[test]
    fn test_patch_deserializes_partial_body() {
        let patch: ProductPatch = serde_json::from_str(r#"{"title":"New title"}"#).unwrap();
        assert_eq!(patch.title.as_deref(), Some("New title"));
        assert!(patch.description.is_none());
        assert!(patch.price.is_none());
    }
}
