use super::*;
use crate::config::RunConfig;

fn config(worker_count: usize) -> RunConfig {
    RunConfig {
        host: "10.0.0.5".to_owned(),
        port: 8080,
        use_tls: false,
        worker_count,
    }
}

#[test]
fn pool_accepts_boundary_worker_counts() {
    assert!(WorkerPool::new(&config(10)).is_ok());
    assert!(WorkerPool::new(&config(250)).is_ok());
}

#[test]
fn pool_rejects_out_of_range_worker_counts() {
    assert!(WorkerPool::new(&config(9)).is_err());
    assert!(WorkerPool::new(&config(251)).is_err());
    assert!(WorkerPool::new(&config(0)).is_err());
}

#[test]
fn pool_rejects_empty_host() {
    let mut bad = config(100);
    bad.host = String::new();
    assert!(WorkerPool::new(&bad).is_err());
}

#[test]
fn pool_target_reflects_tls_choice() {
    let mut tls = config(100);
    tls.use_tls = true;
    tls.port = 443;
    let pool = WorkerPool::new(&tls).unwrap();
    assert_eq!(pool.target().url(), "https://10.0.0.5:443");
}

#[test]
fn client_builds_for_supported_pool_sizes() {
    assert!(build_client(10).is_ok());
    assert!(build_client(250).is_ok());
}
