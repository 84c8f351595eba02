crate::define_flags! {
    /// Language restriction flags for the `lr` query parameter.
    ///
    /// Leaving every flag off (or turning every flag on) omits the
    /// parameter, which the API interprets as "any language".
    pub Language(LanguageTable) {
        arabic => "lang_ar",
        bulgarian => "lang_bg",
        catalan => "lang_ca",
        czech => "lang_cs",
        danish => "lang_da",
        german => "lang_de",
        greek => "lang_el",
        english => "lang_en",
        spanish => "lang_es",
        estonian => "lang_et",
        finnish => "lang_fi",
        french => "lang_fr",
        croatian => "lang_hr",
        hungarian => "lang_hu",
        indonesian => "lang_id",
        icelandic => "lang_is",
        italian => "lang_it",
        hebrew => "lang_iw",
        japanese => "lang_ja",
        korean => "lang_ko",
        lithuanian => "lang_lt",
        latvian => "lang_lv",
        dutch => "lang_nl",
        norwegian => "lang_no",
        polish => "lang_pl",
        portuguese => "lang_pt",
        romanian => "lang_ro",
        russian => "lang_ru",
        slovak => "lang_sk",
        slovenian => "lang_sl",
        serbian => "lang_sr",
        swedish => "lang_sv",
        turkish => "lang_tr",
        chinese_simplified => "lang_zh-CN",
        chinese_traditional => "lang_zh-TW",
    }
}
