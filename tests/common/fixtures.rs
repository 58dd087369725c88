//! Canned HTML pages and API bodies matching the April 2025 markup the
//! scrapers were written against.

/// Google Finance quote page with the stats grid holding a P/E ratio cell.
pub fn google_quote_page(pe: &str) -> String {
    format!(
        r#"<html><body>
          <main>
            <div class="gyFHrc">
              <div class="P6K39c">Market cap</div>
              <div class="QXDnM">2.91T USD</div>
            </div>
            <div class="gyFHrc">
              <div class="P6K39c">P/E ratio</div>
              <div class="QXDnM">{pe}</div>
            </div>
            <div class="gyFHrc">
              <div class="P6K39c">Dividend yield</div>
              <div class="QXDnM">0.44%</div>
            </div>
          </main>
        </body></html>"#
    )
}

/// Google Finance page without the P/E ratio row.
pub fn google_quote_page_without_pe() -> String {
    r#"<html><body>
      <div class="gyFHrc">
        <div class="P6K39c">Market cap</div>
        <div class="QXDnM">2.91T USD</div>
      </div>
    </body></html>"#
        .to_string()
}

/// MarketWatch quote page with the key-value item list.
pub fn marketwatch_quote_page(pe: &str) -> String {
    format!(
        r#"<html><body>
          <ul class="list list--kv">
            <li class="kv__item">Open <span class="primary">187.61</span></li>
            <li class="kv__item">Forward P/E <span class="primary">{pe}</span></li>
            <li class="kv__item">Beta <span class="primary">1.21</span></li>
          </ul>
        </body></html>"#
    )
}

/// Moomoo quote page with the Valuation section.
pub fn moomoo_quote_page(pe: &str) -> String {
    format!(
        r#"<html><body>
          <div>Valuation</div>
          <div>
            <div>Forward P/E</div>
            <div>{pe}</div>
            <div>P/B</div>
            <div>44.10</div>
          </div>
        </body></html>"#
    )
}

/// Yahoo quoteSummary response with the modules the client reads.
pub fn quote_summary_body(short_name: &str, forward_pe: f64) -> String {
    serde_json::json!({
        "quoteSummary": {
            "result": [{
                "price": { "shortName": short_name },
                "assetProfile": {
                    "sector": "Technology",
                    "industry": "Consumer Electronics"
                },
                "financialData": {
                    "currentPrice": { "raw": 189.84, "fmt": "189.84" }
                },
                "summaryDetail": {
                    "trailingPE": { "raw": 29.5, "fmt": "29.50" },
                    "forwardPE": { "raw": forward_pe }
                },
                "defaultKeyStatistics": {}
            }],
            "error": null
        }
    })
    .to_string()
}

/// Yahoo quoteSummary response missing the forward P/E everywhere.
pub fn quote_summary_body_without_forward_pe() -> String {
    serde_json::json!({
        "quoteSummary": {
            "result": [{
                "price": { "shortName": "Test Co" },
                "summaryDetail": {},
                "defaultKeyStatistics": {}
            }],
            "error": null
        }
    })
    .to_string()
}
