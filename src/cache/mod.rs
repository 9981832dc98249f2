//! 缓存层
//!
//! 通过插件注册表按配置选择缓存后端（Moka 内存缓存 / Redis）。

pub mod object_cache;
pub mod register;
pub mod traits;

pub use traits::{CacheResult, ObjectCache};

/// 声明并自动注册一个缓存后端插件
///
/// 在进程启动时（ctor）将构造函数注册到全局注册表，
/// 后端类型需要提供 `fn new() -> Result<Self, String>`。
#[macro_export]
macro_rules! declare_object_cache_plugin {
    ($name:expr, $plugin:ty) => {
        #[ctor::ctor]
        fn __register_object_cache_plugin() {
            $crate::cache::register::register_object_cache_plugin(
                $name,
                std::sync::Arc::new(|| {
                    Box::pin(async {
                        match <$plugin>::new() {
                            Ok(cache) => {
                                Ok(Box::new(cache) as Box<dyn $crate::cache::ObjectCache>)
                            }
                            Err(e) => Err($crate::errors::EduSystemError::cache_connection(e)),
                        }
                    })
                        as $crate::cache::register::BoxedObjectCacheFuture
                }),
            );
        }
    };
}
