//! Sample feed content for a fresh session.

/// One entry of starter feed content.
pub struct SampleThought {
    pub content: &'static str,
    pub like_count: u32,
    pub minutes_ago: i64,
}

/// Starter thoughts shown when a session begins with seeding enabled.
///
/// Ordered oldest-first so that prepending them in sequence produces the
/// newest-first feed order.
pub fn sample_thoughts() -> Vec<SampleThought> {
    vec![
        SampleThought {
            content: "the moon is just the sun's night shift worker",
            like_count: 89,
            minutes_ago: 45,
        },
        SampleThought {
            content: "why do we say 'sleep like a baby' when babies wake up crying every two hours",
            like_count: 47,
            minutes_ago: 23,
        },
        SampleThought {
            content: "sometimes I wonder if clouds get lonely floating up there by themselves",
            like_count: 12,
            minutes_ago: 5,
        },
    ]
}
