//! Admission control integration tests

#[cfg(test)]
mod tests {
    use chat_gateway::{AdmissionController, Decision};
    use std::sync::Arc;
    use std::time::{Duration, Instant};

    /// Count admissions among `attempts` simultaneous calls for one identity
    async fn race(controller: Arc<AdmissionController>, attempts: usize, now: Instant) -> usize {
        let tasks: Vec<_> = (0..attempts)
            .map(|_| {
                let controller = controller.clone();
                tokio::spawn(async move { controller.try_admit("shared", now) })
            })
            .collect();

        let mut admitted = 0;
        for task in tasks {
            if task.await.expect("task panicked").is_admitted() {
                admitted += 1;
            }
        }
        admitted
    }

    #[test]
    fn test_at_most_n_in_any_trailing_window() {
        let window = Duration::from_secs(100);
        let controller = AdmissionController::new(3, window);
        let base = Instant::now();

        // One attempt per second for five windows.
        let admitted: Vec<u64> = (0..500u64)
            .filter(|&s| {
                controller
                    .try_admit("a", base + Duration::from_secs(s))
                    .is_admitted()
            })
            .collect();

        for (i, &start) in admitted.iter().enumerate() {
            let in_window = admitted[i..]
                .iter()
                .take_while(|&&t| t < start + window.as_secs())
                .count();
            assert!(in_window <= 3, "window starting at {start} held {in_window}");
        }
        assert_eq!(admitted.len(), 15);
    }

    #[test]
    fn test_retry_after_points_at_next_free_slot() {
        let controller = AdmissionController::new(2, Duration::from_secs(60));
        let base = Instant::now();

        controller.try_admit("a", base);
        controller.try_admit("a", base + Duration::from_secs(20));

        let retry_after = match controller.try_admit("a", base + Duration::from_secs(45)) {
            Decision::Rejected { retry_after } => retry_after,
            Decision::Admitted => panic!("third request inside the window was admitted"),
        };
        assert_eq!(retry_after, Duration::from_secs(15));

        let next = base + Duration::from_secs(45) + retry_after;
        assert!(controller.try_admit("a", next).is_admitted());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn test_concurrent_burst_admits_exactly_remaining_slots() {
        let controller = Arc::new(AdmissionController::new(10, Duration::from_secs(3600)));
        let now = Instant::now();

        for _ in 0..4 {
            assert!(controller.try_admit("shared", now).is_admitted());
        }

        assert_eq!(race(controller.clone(), 64, now).await, 6);
        assert_eq!(controller.in_window("shared", now), 10);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_bursts_from_many_clients_are_isolated() {
        let controller = Arc::new(AdmissionController::new(2, Duration::from_secs(3600)));
        let now = Instant::now();

        let tasks: Vec<_> = (0..50)
            .flat_map(|client| (0..5).map(move |_| client))
            .map(|client| {
                let controller = controller.clone();
                tokio::spawn(async move {
                    controller
                        .try_admit(&format!("client-{client}"), now)
                        .is_admitted()
                })
            })
            .collect();

        let mut admitted = 0;
        for task in tasks {
            if task.await.expect("task panicked") {
                admitted += 1;
            }
        }

        assert_eq!(admitted, 100);
        assert_eq!(controller.tracked_identities(), 50);
    }

    #[test]
    fn test_sweep_then_admit_behaves_like_fresh_client() {
        let controller = AdmissionController::new(1, Duration::from_secs(10));
        let base = Instant::now();

        for i in 0..100 {
            controller.try_admit(&format!("c{i}"), base);
        }
        assert_eq!(controller.tracked_identities(), 100);

        assert_eq!(controller.sweep_idle(base + Duration::from_secs(10)), 100);
        assert_eq!(controller.tracked_identities(), 0);
        assert!(
            controller
                .try_admit("c0", base + Duration::from_secs(10))
                .is_admitted()
        );
    }
}
