use serde::{Deserialize, Serialize};

/// MBTI 维度字母枚举
///
/// 八个字母各属于四个维度对中的一个：E/I、S/N、T/F、J/P
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Dimension {
    /// 外向
    E,
    /// 内向
    I,
    /// 实感
    S,
    /// 直觉
    N,
    /// 思考
    T,
    /// 情感
    F,
    /// 判断
    J,
    /// 感知
    P,
}

impl Dimension {
    /// 全部八个维度字母，按维度对顺序排列
    pub const ALL: [Dimension; 8] = [
        Dimension::E,
        Dimension::I,
        Dimension::S,
        Dimension::N,
        Dimension::T,
        Dimension::F,
        Dimension::J,
        Dimension::P,
    ];

    /// 获取维度字母
    pub fn letter(self) -> char {
        match self {
            Dimension::E => 'E',
            Dimension::I => 'I',
            Dimension::S => 'S',
            Dimension::N => 'N',
            Dimension::T => 'T',
            Dimension::F => 'F',
            Dimension::J => 'J',
            Dimension::P => 'P',
        }
    }

    /// 从字母解析维度
    pub fn from_letter(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'E' => Some(Dimension::E),
            'I' => Some(Dimension::I),
            'S' => Some(Dimension::S),
            'N' => Some(Dimension::N),
            'T' => Some(Dimension::T),
            'F' => Some(Dimension::F),
            'J' => Some(Dimension::J),
            'P' => Some(Dimension::P),
            _ => None,
        }
    }

    /// 获取该字母所属的维度对
    pub fn dichotomy(self) -> Dichotomy {
        match self {
            Dimension::E | Dimension::I => Dichotomy::EI,
            Dimension::S | Dimension::N => Dichotomy::SN,
            Dimension::T | Dimension::F => Dichotomy::TF,
            Dimension::J | Dimension::P => Dichotomy::JP,
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// 维度对枚举
///
/// 四个固定的维度对，顺序固定：E/I → S/N → T/F → J/P。
/// 类型代码的四个字母按此顺序拼接。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Dichotomy {
    /// 外向 / 内向
    EI,
    /// 实感 / 直觉
    SN,
    /// 思考 / 情感
    TF,
    /// 判断 / 感知
    JP,
}

impl Dichotomy {
    /// 全部四个维度对，按固定顺序排列
    pub const ALL: [Dichotomy; 4] = [
        Dichotomy::EI,
        Dichotomy::SN,
        Dichotomy::TF,
        Dichotomy::JP,
    ];

    /// 维度对左侧字母（平局时的默认选择）
    pub fn left(self) -> Dimension {
        match self {
            Dichotomy::EI => Dimension::E,
            Dichotomy::SN => Dimension::S,
            Dichotomy::TF => Dimension::T,
            Dichotomy::JP => Dimension::J,
        }
    }

    /// 维度对右侧字母
    pub fn right(self) -> Dimension {
        match self {
            Dichotomy::EI => Dimension::I,
            Dichotomy::SN => Dimension::N,
            Dichotomy::TF => Dimension::F,
            Dichotomy::JP => Dimension::P,
        }
    }

    /// 获取 "E/I" 形式的键名
    pub fn key(self) -> &'static str {
        match self {
            Dichotomy::EI => "E/I",
            Dichotomy::SN => "S/N",
            Dichotomy::TF => "T/F",
            Dichotomy::JP => "J/P",
        }
    }
}

impl std::fmt::Display for Dichotomy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

// 百分比映射以 "E/I" 形式的字符串作为键，手动实现序列化
impl Serialize for Dichotomy {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_roundtrip() {
        for dim in Dimension::ALL {
            assert_eq!(Dimension::from_letter(dim.letter()), Some(dim));
        }
        assert_eq!(Dimension::from_letter('e'), Some(Dimension::E));
        assert_eq!(Dimension::from_letter('X'), None);
    }

    #[test]
    fn test_dichotomy_membership() {
        assert_eq!(Dimension::E.dichotomy(), Dichotomy::EI);
        assert_eq!(Dimension::I.dichotomy(), Dichotomy::EI);
        assert_eq!(Dimension::N.dichotomy(), Dichotomy::SN);
        assert_eq!(Dimension::F.dichotomy(), Dichotomy::TF);
        assert_eq!(Dimension::P.dichotomy(), Dichotomy::JP);
    }

    #[test]
    fn test_pair_sides_and_keys() {
        let keys: Vec<&str> = Dichotomy::ALL.iter().map(|p| p.key()).collect();
        assert_eq!(keys, vec!["E/I", "S/N", "T/F", "J/P"]);

        for pair in Dichotomy::ALL {
            assert_eq!(pair.left().dichotomy(), pair);
            assert_eq!(pair.right().dichotomy(), pair);
            assert_ne!(pair.left(), pair.right());
        }
    }

    #[test]
    fn test_dimension_deserialize_from_yaml() {
        let dim: Dimension = serde_yaml::from_str("E").unwrap();
        assert_eq!(dim, Dimension::E);

        let bad: Result<Dimension, _> = serde_yaml::from_str("X");
        assert!(bad.is_err());
    }
}
