//! # 合并两份 better energies
//!
//! 对第一份中的每个态，在第二份中按不可约表示查找同一个态，
//! 把两者的跃迁能相加、模型名用 "+" 连接。第二份中缺失的态原样保留。
//!
//! ## 依赖关系
//! - 被 `commands/merge.rs` 调用

use crate::models::{BetterEnergy, Irrep};

/// 合并结果
#[derive(Debug, Clone, PartialEq)]
pub struct Merged {
    pub states: Vec<BetterEnergy>,
    /// 第二份中找不到的态
    pub missing: Vec<Irrep>,
}

/// 合并 `first` 与 `second`，输出顺序与 `first` 一致
pub fn merge(first: Vec<BetterEnergy>, second: &[BetterEnergy]) -> Merged {
    let mut missing = Vec::new();

    let states = first
        .into_iter()
        .map(|mut state| {
            match second.iter().find(|add| add.irrep == state.irrep) {
                Some(addition) => {
                    state.energy.transition = state.energy.transition + addition.energy.transition;
                    state.model = format!("{}+{}", state.model, addition.model);
                }
                None => missing.push(state.irrep.clone()),
            }
            state
        })
        .collect();

    Merged { states, missing }
}
