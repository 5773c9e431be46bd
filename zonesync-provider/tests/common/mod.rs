//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::env;
use std::sync::Arc;

use wiremock::MockServer;
use zonesync_provider::{DnsProvider, ProviderCredentials, TransipProvider, create_provider};

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("跳过测试: 缺少环境变量 {}", $var);
                return;
            }
        )+
    };
}

/// 真实账户测试上下文
pub struct TestContext {
    pub provider: Arc<dyn DnsProvider>,
    pub domain: String,
}

impl TestContext {
    /// 从环境变量创建 TransIP 测试上下文
    pub fn transip() -> Option<Self> {
        let login = env::var("TRANSIP_LOGIN").ok()?;
        let access_token = env::var("TRANSIP_ACCESS_TOKEN").ok()?;
        let domain = env::var("TEST_DOMAIN").ok()?;

        let provider = create_provider(ProviderCredentials::Transip {
            login,
            access_token,
        })
        .ok()?;

        Some(Self { provider, domain })
    }
}

/// 指向 mock server 的 provider
pub fn mock_provider(server: &MockServer) -> TransipProvider {
    TransipProvider::with_base_url("alice".to_string(), "test-token".to_string(), server.uri())
        .unwrap()
}
