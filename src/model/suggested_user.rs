/// An account suggested for following. Local only, never sent anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestedUser {
    pub id: u64,
    pub name: String,
    pub avatar: String,
    pub followers: u64,
    pub is_following: bool,
}

impl SuggestedUser {
    /// Follower count with thousands separators, e.g. `12,000`.
    pub fn followers_label(&self) -> String {
        let digits = self.followers.to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(ch);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(followers: u64) -> SuggestedUser {
        SuggestedUser {
            id: 1,
            name: "n".into(),
            avatar: "a".into(),
            followers,
            is_following: false,
        }
    }

    #[test]
    fn followers_label_groups_thousands() {
        assert_eq!(user(0).followers_label(), "0");
        assert_eq!(user(999).followers_label(), "999");
        assert_eq!(user(7500).followers_label(), "7,500");
        assert_eq!(user(1_234_567).followers_label(), "1,234,567");
    }
}
