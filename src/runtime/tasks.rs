//! 后台任务

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, error, info};

use crate::config::AppConfig;
use crate::storage::Storage;

/// 启动过期通知清理任务
///
/// 按 notification.sweep_interval 周期删除 expires_at 已过的通知。
/// 随服务器进程退出，无需单独的停止信号。
pub fn spawn_notification_sweeper(storage: Arc<dyn Storage>) {
    let interval_secs = AppConfig::get().notification.sweep_interval;

    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(interval_secs));
        // 第一个 tick 立即触发，清理历史积压
        loop {
            interval.tick().await;
            match storage.delete_expired_notifications().await {
                Ok(0) => debug!("Notification sweeper: nothing to delete"),
                Ok(deleted) => info!("Notification sweeper: deleted {} expired", deleted),
                Err(e) => error!("Notification sweeper failed: {}", e),
            }
        }
    });

    info!(
        "Notification sweeper started (interval: {}s)",
        interval_secs
    );
}
