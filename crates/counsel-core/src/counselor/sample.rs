//! Bundled sample counselors.
//!
//! No backend is wired in yet, so list and search views render this
//! fixed set.

use super::model::CounselorRecord;

/// Returns the sample counselor collection in display order.
pub fn get_all_counselors() -> Vec<CounselorRecord> {
    vec![
        CounselorRecord::new("counselor-1", "Sarah Johnson", "Anxiety")
            .with_specialties(["Anxiety", "Depression", "Relationships"])
            .with_rating(4.9)
            .with_rate(35)
            .with_avatar("avatars/sarah-johnson.png")
            .with_online(true)
            .with_experience(8),
        CounselorRecord::new("counselor-2", "Lisa Taylor", "Stress")
            .with_specialties(["Stress", "Work-Life Balance", "Mindfulness"])
            .with_rating(4.8)
            .with_rate(40)
            .with_avatar("avatars/lisa-taylor.png")
            .with_online(true)
            .with_experience(6),
        CounselorRecord::new("counselor-3", "Mike Chen", "Career")
            .with_specialties(["Career", "Stress", "Motivation"])
            .with_rating(4.9)
            .with_rate(45)
            .with_avatar("avatars/mike-chen.png")
            .with_online(false)
            .with_experience(12),
        CounselorRecord::new("counselor-4", "Emma Davis", "Stress")
            .with_specialties(["Stress", "Sleep"])
            .with_rating(3.6)
            .with_rate(25)
            .with_avatar("avatars/emma-davis.png")
            .with_online(true)
            .with_experience(2),
        CounselorRecord::new("counselor-5", "James Wilson", "Relationships")
            .with_specialties(["Relationships", "Family"])
            .with_rating(0.0)
            .with_rate(30)
            .with_avatar("avatars/james-wilson.png")
            .with_online(false),
    ]
}
