//! Route contract for the preview server.
//!
//! The preview must serve exactly what a static host would: the page, its
//! assets, the wasm bundle and a status check. Routes are read from the
//! router in `src/main.rs` by walking its syntax tree, so formatting changes
//! don't matter; `tests/fixtures/api_routes.txt` pins the expected set.

use std::collections::BTreeSet;
use std::fs;

use syn::visit::Visit;
use syn::{Expr, ExprCall, ExprLit, ExprMethodCall, Lit};

const GOLDEN: &str = "tests/fixtures/api_routes.txt";

/// axum method-router constructors and their chained forms
const METHOD_ROUTERS: &[&str] = &["get", "post", "put", "patch", "delete", "head", "options", "any"];

#[derive(Default)]
struct RouteCollector {
    routes: BTreeSet<String>,
}

impl RouteCollector {
    /// `get(h)`, `get(h).post(h2)` and friends, in any order
    fn methods(expr: &Expr, out: &mut Vec<String>) {
        match expr {
            Expr::Call(ExprCall { func, .. }) => {
                if let Expr::Path(path) = func.as_ref() {
                    if let Some(last) = path.path.segments.last() {
                        let name = last.ident.to_string();
                        if METHOD_ROUTERS.contains(&name.as_str()) {
                            out.push(name.to_uppercase());
                        }
                    }
                }
            }
            Expr::MethodCall(call) => {
                let name = call.method.to_string();
                if METHOD_ROUTERS.contains(&name.as_str()) {
                    out.push(name.to_uppercase());
                }
                Self::methods(&call.receiver, out);
            }
            _ => {}
        }
    }
}

fn string_arg(expr: Option<&Expr>) -> Option<String> {
    match expr? {
        Expr::Lit(ExprLit {
            lit: Lit::Str(s), ..
        }) => Some(s.value()),
        _ => None,
    }
}

impl<'ast> Visit<'ast> for RouteCollector {
    fn visit_expr_method_call(&mut self, call: &'ast ExprMethodCall) {
        match call.method.to_string().as_str() {
            "route" => {
                if let Some(path) = string_arg(call.args.first()) {
                    let mut methods = Vec::new();
                    if let Some(handler) = call.args.iter().nth(1) {
                        Self::methods(handler, &mut methods);
                    }
                    if methods.is_empty() {
                        methods.push("UNKNOWN".to_string());
                    }
                    for method in methods {
                        self.routes.insert(format!("{method} {path}"));
                    }
                }
            }
            "nest_service" | "nest" => {
                if let Some(path) = string_arg(call.args.first()) {
                    self.routes.insert(format!("NEST {path}"));
                }
            }
            _ => {}
        }
        syn::visit::visit_expr_method_call(self, call);
    }
}

fn golden_lines() -> Vec<String> {
    fs::read_to_string(GOLDEN)
        .expect("read golden route list")
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect()
}

fn routes_in_main() -> BTreeSet<String> {
    let source = fs::read_to_string("src/main.rs").expect("read src/main.rs");
    let file = syn::parse_file(&source).expect("src/main.rs parses");
    let mut collector = RouteCollector::default();
    collector.visit_file(&file);
    collector.routes
}

#[test]
fn routes_match_golden_list() {
    let golden: BTreeSet<String> = golden_lines().into_iter().collect();
    let actual = routes_in_main();

    let added: Vec<_> = actual.difference(&golden).collect();
    let removed: Vec<_> = golden.difference(&actual).collect();

    assert!(
        added.is_empty() && removed.is_empty(),
        "router drifted from {GOLDEN}\n  added: {added:?}\n  removed: {removed:?}\n\
         update the list only if the change is intended"
    );
}

#[test]
fn preview_serves_reads_only() {
    let writes: Vec<_> = routes_in_main()
        .into_iter()
        .filter(|route| !route.starts_with("GET ") && !route.starts_with("NEST "))
        .collect();
    assert!(
        writes.is_empty(),
        "the site is static; no route may accept form posts: {writes:?}"
    );
}

#[test]
fn collector_reads_chained_and_multiline_routes() {
    let file: syn::File = syn::parse_quote! {
        fn app() -> Router {
            Router::new()
                .route(
                    "/a",
                    get(a_handler),
                )
                .route("/b", axum::routing::get(b).post(b_post))
                .nest_service("/static", ServeDir::new("s"))
        }
    };
    let mut collector = RouteCollector::default();
    collector.visit_file(&file);

    let expected: BTreeSet<String> = ["GET /a", "GET /b", "POST /b", "NEST /static"]
        .into_iter()
        .map(String::from)
        .collect();
    assert_eq!(collector.routes, expected);
}

#[test]
fn golden_list_is_sorted() {
    let lines = golden_lines();
    let mut sorted = lines.clone();
    sorted.sort();
    assert_eq!(lines, sorted, "{GOLDEN} must stay sorted");
}
