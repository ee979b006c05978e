//! Page Context - Value Objects

use crate::domain::identity::entity_id;

entity_id! {
    /// 页面唯一标识
    PageId
}
