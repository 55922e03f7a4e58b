//! # 随机密码生成
//!
//! 从大小写字母、数字与 ASCII 标点中有放回地均匀抽取字符。
//!
//! 随机源为 `rand::rng()`，不对其密码学强度做任何承诺。
//!
//! ## 依赖关系
//! - 被 `commands/password.rs` 调用
//! - 使用 `rand` crate

use rand::seq::IndexedRandom;
use rand::Rng;

/// 默认密码长度
pub const DEFAULT_LENGTH: usize = 12;

/// 候选字符集：字母 + 数字 + 32 个 ASCII 标点
pub const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz\
ABCDEFGHIJKLMNOPQRSTUVWXYZ\
0123456789\
!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// 使用线程本地随机源生成密码
pub fn generate_password(length: usize) -> String {
    generate_with(&mut rand::rng(), length)
}

/// 使用给定随机源生成密码
pub fn generate_with<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    (0..length)
        .filter_map(|_| CHARSET.choose(rng).map(|&b| b as char))
        .collect()
}
