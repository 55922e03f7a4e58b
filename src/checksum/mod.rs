//! # 文件哈希
//!
//! 以 8 KiB 分块流式计算文件摘要，输出小写十六进制字符串。
//!
//! ## 依赖关系
//! - 被 `commands/hash.rs` 调用
//! - 使用 `cli/hash.rs` 定义的算法枚举
//! - 使用 `md-5`, `sha1`, `sha2`, `hex`

use crate::cli::hash::HashAlgorithm;
use crate::error::{FilekitError, Result};

use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{self, ErrorKind, Read};
use std::path::Path;

/// 读取块大小
pub const CHUNK_SIZE: usize = 8192;

/// 计算文件哈希值
pub fn compute_file_hash(path: &Path, algorithm: HashAlgorithm) -> Result<String> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => FilekitError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => FilekitError::FileReadError {
            path: path.display().to_string(),
            source: e,
        },
    })?;

    hash_reader(file, algorithm).map_err(|e| FilekitError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })
}

/// 对任意读取源计算摘要
pub fn hash_reader<R: Read>(reader: R, algorithm: HashAlgorithm) -> io::Result<String> {
    match algorithm {
        HashAlgorithm::Md5 => digest_stream::<Md5, _>(reader),
        HashAlgorithm::Sha1 => digest_stream::<Sha1, _>(reader),
        HashAlgorithm::Sha256 => digest_stream::<Sha256, _>(reader),
    }
}

fn digest_stream<D: Digest, R: Read>(mut reader: R) -> io::Result<String> {
    let mut hasher = D::new();
    let mut buf = [0u8; CHUNK_SIZE];

    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        hasher.update(&buf[..n]);
    }

    Ok(hex::encode(hasher.finalize()))
}
