//! Client Router - 客户端路径到视图的映射
//!
//! 路由表在构造时显式传入，不依赖全局状态
//!
//! 默认路由:
//! - /           列表视图
//! - /books      列表视图（别名）
//! - /book/:id   详情视图
//! - /edit/:id   编辑视图
//! - /newbook    编辑视图（新建模式，无 id）

use std::collections::HashMap;

/// 路由目标视图
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    List,
    Detail,
    Edit,
}

/// 路由表项
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDef {
    pub pattern: String,
    pub view: ViewKind,
}

impl RouteDef {
    pub fn new(pattern: impl Into<String>, view: ViewKind) -> Self {
        Self {
            pattern: pattern.into(),
            view,
        }
    }
}

/// 默认路由表
pub fn default_routes() -> Vec<RouteDef> {
    vec![
        RouteDef::new("/", ViewKind::List),
        RouteDef::new("/books", ViewKind::List),
        RouteDef::new("/book/:id", ViewKind::Detail),
        RouteDef::new("/edit/:id", ViewKind::Edit),
        RouteDef::new("/newbook", ViewKind::Edit),
    ]
}

/// 路由匹配结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub view: ViewKind,
    pub params: HashMap<String, String>,
    pub query: HashMap<String, String>,
}

impl RouteMatch {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    pub fn query(&self, name: &str) -> Option<&str> {
        self.query.get(name).map(String::as_str)
    }
}

/// 客户端路由器
#[derive(Debug, Clone)]
pub struct Router {
    routes: Vec<RouteDef>,
}

impl Router {
    pub fn new(routes: Vec<RouteDef>) -> Self {
        Self { routes }
    }

    pub fn routes(&self) -> &[RouteDef] {
        &self.routes
    }

    /// 解析位置（路径 + 可选查询串），按路由表顺序返回首个匹配
    pub fn resolve(&self, location: &str) -> Option<RouteMatch> {
        let (path, query) = match location.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (location, None),
        };
        let segments = split_path(path);

        self.routes.iter().find_map(|route| {
            let params = match_pattern(&route.pattern, &segments)?;
            Some(RouteMatch {
                view: route.view,
                params,
                query: query.map(parse_query).unwrap_or_default(),
            })
        })
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new(default_routes())
    }
}

/// 拆分路径段，忽略首尾 `/`
fn split_path(path: &str) -> Vec<&str> {
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        Vec::new()
    } else {
        trimmed.split('/').collect()
    }
}

fn match_pattern(pattern: &str, segments: &[&str]) -> Option<HashMap<String, String>> {
    let pattern_segments = split_path(pattern);
    if pattern_segments.len() != segments.len() {
        return None;
    }

    let mut params = HashMap::new();
    for (expected, actual) in pattern_segments.iter().zip(segments) {
        if let Some(name) = expected.strip_prefix(':') {
            if actual.is_empty() {
                return None;
            }
            let value = urlencoding::decode(actual).ok()?.into_owned();
            params.insert(name.to_string(), value);
        } else if expected != actual {
            return None;
        }
    }
    Some(params)
}

/// 解析查询串，`+` 视为空格
pub fn parse_query(query: &str) -> HashMap<String, String> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .filter_map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let key = urlencoding::decode(&key.replace('+', " ")).ok()?.into_owned();
            let value = urlencoding::decode(&value.replace('+', " ")).ok()?.into_owned();
            Some((key, value))
        })
        .collect()
}
