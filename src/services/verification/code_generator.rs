//! 인증 코드 생성기
//!
//! 운영체제 난수원(`OsRng`)에서 영숫자 비밀 코드를 만듭니다.

use rand::distributions::{Alphanumeric, DistString};
use rand::rngs::OsRng;

use crate::config::MIN_VERIFICATION_CODE_LENGTH;

pub trait CodeGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// 암호학적으로 안전한 난수 기반 생성기
#[derive(Debug, Clone, Copy)]
pub struct RandomCodeGenerator {
    length: usize,
}

impl RandomCodeGenerator {
    /// 요청 길이가 최소 길이보다 짧으면 최소 길이를 사용합니다.
    pub fn new(length: usize) -> Self {
        Self {
            length: length.max(MIN_VERIFICATION_CODE_LENGTH),
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

impl Default for RandomCodeGenerator {
    fn default() -> Self {
        Self::new(MIN_VERIFICATION_CODE_LENGTH)
    }
}

impl CodeGenerator for RandomCodeGenerator {
    fn generate(&self) -> String {
        Alphanumeric.sample_string(&mut OsRng, self.length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_codes_are_long_alphanumeric_and_distinct() {
        let generator = RandomCodeGenerator::new(48);

        let codes: HashSet<String> = (0..50).map(|_| generator.generate()).collect();

        assert_eq!(codes.len(), 50);
        assert!(codes.iter().all(|c| c.len() == 48));
        assert!(codes.iter().all(|c| c.chars().all(|ch| ch.is_ascii_alphanumeric())));
    }

    #[test]
    fn test_length_never_below_minimum() {
        let generator = RandomCodeGenerator::new(8);

        assert_eq!(generator.length(), MIN_VERIFICATION_CODE_LENGTH);
        assert_eq!(generator.generate().len(), MIN_VERIFICATION_CODE_LENGTH);
    }
}
