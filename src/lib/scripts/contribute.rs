use crate::{
    config::SiteConfig,
    document::Document,
    elements::{embedded_link, footer, header, important, line, text, title_section},
    page::PageModel,
    scripts::{date, nav_items},
};

pub const KEY: &str = "contribute";
pub const ROUTE: &str = "ru/contribute";
pub const LABEL: &str = "Стать Автором";

const ARTICLES_REPO: &str = "https://github.com/sparrowcode/Articles";

pub fn model(config: &SiteConfig) -> color_eyre::Result<PageModel> {
    Ok(PageModel::new(
        KEY,
        config.site_name.as_str(),
        "Стать Автором",
        "",
        vec![],
        date("20.03.2022")?,
        date("20.03.2022")?,
    ))
}

pub fn render(config: &SiteConfig) -> color_eyre::Result<Document> {
    let page = model(config)?;
    let mut doc = Document::new();

    doc.push(header(&page, &nav_items()));

    doc.push(title_section("Выбрать тему"));
    doc.push(text(
        "Свободный выбор темы про iOS/macOS/watchOS разработку. Если не знаете про что писать, гляньте на список: `Date` и временные зоны, `FileManager`, Cell Registration + SideBar, работа с потоками.",
    ));

    doc.push(title_section("План"));
    doc.push(text(&format!(
        "План статьи это секции и подсекции. {} для утверждения.",
        embedded_link("Отправьте его", &config.telegram_link)
    )));

    doc.push(title_section("Форматирование, медиа-файлы"));
    doc.push(text(&format!(
        "Используем Markdown. В описании {} есть готовые статьи, гляньте форматирование в них. Заголовок писать не нужно, он указывается в meta-файле.",
        embedded_link("репозитория", ARTICLES_REPO)
    )));
    doc.push(text("Рекомендации чтобы сделать текст чистым и упругим:"));
    doc.push(text(
        "- Если без слова/предложения смысл не меняется - удаляем. Читателю будет легче фокусироваться.",
    ));
    doc.push(text(
        "- Не давать оценок за читателя. Опишите преимущества и недостатки через примеры.",
    ));
    doc.push(text(
        "- Стремится к конструкции подлежащее+сказуемое. Слова `измененный`, `перенесенный` - убивают энергию глагола. Переформулируйте.",
    ));
    doc.push(text(
        "Картинки, видео и файлы отправляйте мне - я загружу их на хостинг и дам ссылки.",
    ));

    doc.push(title_section("Публикация"));
    doc.push(important("Чтобы поддержать авторов, мы платим 40$ за туториал."));
    doc.push(text(
        "Когда закончили статью, сделайте Pull Request. Не забудьте добавить meta-файл с указанием заголовка, автора, ключевых слов и т.д. Проверка займет 1-2 дня.",
    ));

    doc.push(line());
    doc.push(footer(config));

    Ok(doc)
}
