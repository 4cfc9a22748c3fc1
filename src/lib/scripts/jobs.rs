use crate::{
    config::SiteConfig,
    document::Document,
    elements::{embedded_link, footer, header, important, line, text, title_section},
    page::PageModel,
    scripts::{contribute, date, nav_items},
};

pub const KEY: &str = "jobs";
pub const ROUTE: &str = "ru/jobs";
pub const LABEL: &str = "Вакансии";

const GITHUB_PROJECTS_API: &str = "https://docs.github.com/en/issues/trying-out-the-new-projects-experience/using-the-api-to-manage-projects";
const GENERAMBA: &str = "https://github.com/strongself/Generamba";
const EDITING_BOOK: &str = "https://www.ozon.ru/product/pishi-sokrashchay-kak-sozdavat-silnye-teksty-sarycheva-lyudmila-ilyahov-maksim-241182327/?sh=yYPBQQAAAA";
const ARTICLES_RU: &str = "https://github.com/sparrowcode/Articles/tree/main/ru/articles";

pub fn model(config: &SiteConfig) -> color_eyre::Result<PageModel> {
    let description = format!(
        "Полное рабочий день или частичная занятость. Только удалёнка. Компания в UK, компенсируем подоходный налог в вашей стране. Зарплату платим долларах. Задать вопросы {}.",
        embedded_link("в телеграм", &config.telegram_link)
    );

    Ok(PageModel::new(
        KEY,
        config.site_name.as_str(),
        "Вакансии",
        description,
        vec![],
        date("12.03.2022")?,
        date("12.03.2022")?,
    ))
}

pub fn render(config: &SiteConfig) -> color_eyre::Result<Document> {
    let page = model(config)?;
    let mut doc = Document::new();

    doc.push(header(&page, &nav_items()));

    doc.push(important(&format!(
        "Приглашаем авторов. Платим 40$ за туториал. Подробности {}.",
        embedded_link("здесь", &config.url(contribute::ROUTE))
    )));

    doc.push(title_section("iOS Разработчик: iOS Приложение"));
    doc.push(text(&format!(
        "Приложение для управление GitHub Projects. Список проектов, изменение карточек и полей в задачах.\nУ гитхаба есть {} на `http` запросах. Без базы данных. Можно джуну+ без комерческого опыта. Работа для одного разработчика. Предпочтительно UIKit. Обязательно лейаут кодом и понимание Diffable для коллекции и таблицы. Можно совмещать с основной работой.",
        embedded_link("API", GITHUB_PROJECTS_API)
    )));

    doc.push(title_section("iOS Разработчик: Mac Приложение"));
    doc.push(text(&format!(
        "UIKit` + Catalyst или нативно. Приложение-генератор {}. Нужно сделать интрефейс и генерацию. Будут разные структуры - Viper, MVC, кастомные. Проект для одного разработчика: только вы будете заниматься кодом. Можно сдельную, можно ЗП. Можно совмещать с основой работой. В личку присылайте свои текущие проекты, если они не в сторе - скринкасты. Тестового задания нет.",
        embedded_link("структуры проекта", GENERAMBA)
    )));

    doc.push(title_section("Редактор"));
    doc.push(text(&format!(
        "Обязательно база по iOS разработке. Нужно чистить лишние слова в туториалах, приводить предложения к подлежащее+сказуемое, вычитывать ошибки. Работы мало, поэтому только парт-тайм. Можно совмещать с основной работой. Обязательно владеть книгой {}",
        embedded_link("Пиши Сокращай", EDITING_BOOK)
    )));
    doc.push(text(&format!(
        "Тестовое задание: отредактировать текст в любой статье {}. После сделать `Pull Request`. Перед тестовым заданием напишите желаему ЗП/сдельную сумму.",
        embedded_link("из репозитория", ARTICLES_RU)
    )));

    doc.push(line());
    doc.push(footer(config));

    Ok(doc)
}
