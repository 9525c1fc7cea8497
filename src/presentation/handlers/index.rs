use axum::response::Html;

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>PDF Question Answering</title>
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
            text-align: center;
            margin: 40px;
            background-color: #f7f7f7;
            color: #333;
        }
        .container {
            max-width: 600px;
            margin: 0 auto;
            background-color: #fff;
            padding: 30px;
            border-radius: 8px;
            box-shadow: 0 4px 8px rgba(0,0,0,0.1);
        }
        h1 { color: #0056b3; }
        p { font-size: 1.1em; line-height: 1.6; }
        code {
            background-color: #f0f0f0;
            padding: 2px 6px;
            border-radius: 4px;
        }
    </style>
</head>
<body>
    <div class="container">
        <h1>PDF Question Answering</h1>
        <p>Upload PDF documents and ask questions about their content.</p>
        <p>
            <code>POST /upload/</code> &middot;
            <code>POST /query/</code> &middot;
            <code>GET /details/all/</code>
        </p>
    </div>
</body>
</html>
"#;

/// Static informational landing page.
pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}
