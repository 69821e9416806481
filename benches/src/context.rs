use extra_filters::Value;
use rand::Rng;

#[derive(serde::Serialize)]
pub struct Context {
    pub title: String,
    pub prices: Vec<String>,
    pub quantities: Vec<i64>,
}

pub fn random(n: usize) -> Context {
    let mut rng = rand::thread_rng();
    let title = (0..20).map(|_| rng.gen_range('a'..='z')).collect();
    let prices = (0..n)
        .map(|_| format!("{:.2}", rng.gen_range(0.0..1000.0)))
        .collect();
    let quantities = (0..n).map(|_| rng.gen_range(1..100)).collect();
    Context {
        title,
        prices,
        quantities,
    }
}

/// Converts the context into a template value by way of JSON, the way a
/// template engine would receive it.
pub fn to_value(ctx: &Context) -> Value {
    let json = serde_json::to_string(ctx).unwrap();
    serde_json::from_str(&json).unwrap()
}
