pub fn homepage() -> String {
    r#"<section class="hero">
      <h1>Where Coffee Dreams Come True</h1>
      <p>Find a cafe, read about it, and keep track of the ones you love.</p>
      <p><a class="btn" href="/cafes">Browse cafes</a></p>
    </section>"#
        .to_string()
}
