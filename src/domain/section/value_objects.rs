//! Section Context - Value Objects

use crate::domain::identity::entity_id;

entity_id! {
    /// 分区唯一标识
    SectionId
}
