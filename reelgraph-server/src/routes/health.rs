use salvo::prelude::*;

#[handler]
pub async fn health_check(res: &mut Response) {
    res.status_code(StatusCode::OK);
    res.render(Text::Plain("OK"));
}
