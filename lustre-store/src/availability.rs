use async_trait::async_trait;
use chrono::{Duration, Utc};
use lustre_shared::{DayAvailability, TimeSlot};

/// Scheduling collaborator. The consumed shape is the contract; the stub
/// generator below is a placeholder for a real availability backend.
#[async_trait]
pub trait AvailabilitySource: Send + Sync {
    async fn upcoming(&self) -> Vec<DayAvailability>;
}

const SLOT_TIMES: [&str; 5] = ["8:00 AM", "10:00 AM", "12:00 PM", "2:00 PM", "4:00 PM"];

/// Generates 30 days forward with two slots per day synthetically marked
/// unavailable, cycling through the slot positions day by day.
pub struct StubAvailabilitySource;

#[async_trait]
impl AvailabilitySource for StubAvailabilitySource {
    async fn upcoming(&self) -> Vec<DayAvailability> {
        let today = Utc::now().date_naive();
        (0..30)
            .map(|day| {
                let date = today + Duration::days(day + 1);
                let blocked_a = (day as usize) % SLOT_TIMES.len();
                let blocked_b = (day as usize + 2) % SLOT_TIMES.len();

                let time_slots: Vec<TimeSlot> = SLOT_TIMES
                    .iter()
                    .enumerate()
                    .map(|(i, time)| TimeSlot {
                        id: format!("{}-slot-{}", date, i),
                        time: time.to_string(),
                        available: i != blocked_a && i != blocked_b,
                    })
                    .collect();

                DayAvailability {
                    date,
                    available: time_slots.iter().any(|slot| slot.available),
                    time_slots,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_generates_thirty_days() {
        let days = StubAvailabilitySource.upcoming().await;
        assert_eq!(days.len(), 30);
        assert!(days.iter().all(|d| d.available));
    }

    #[tokio::test]
    async fn test_exactly_two_slots_blocked_per_day() {
        let days = StubAvailabilitySource.upcoming().await;
        for day in &days {
            let blocked = day.time_slots.iter().filter(|s| !s.available).count();
            assert_eq!(blocked, 2, "day {} should block two slots", day.date);
        }
    }

    #[tokio::test]
    async fn test_blocked_slots_cycle_across_days() {
        let days = StubAvailabilitySource.upcoming().await;
        let pattern: Vec<Vec<usize>> = days
            .iter()
            .take(2)
            .map(|day| {
                day.time_slots
                    .iter()
                    .enumerate()
                    .filter(|(_, s)| !s.available)
                    .map(|(i, _)| i)
                    .collect()
            })
            .collect();
        assert_ne!(pattern[0], pattern[1]);
    }
}
