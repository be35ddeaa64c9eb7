// Методы сканирования лексического анализатора

impl Lexer {
    /// Возвращает следующий токен или `None` после конца входа
    ///
    /// Нераспознанный символ — фатальная ошибка текущей токенизации:
    /// позиция не пропускается, дальнейшие вызовы возвращают `None`.
    pub fn next_token(&mut self) -> Result<Option<Token>> {
        if self.state == ScanState::Done {
            return Ok(None);
        }

        // Проверяем конец входа
        if self.position >= self.input.len() {
            self.state = ScanState::Done;
            return Ok(None);
        }

        let start_position = self.current_position.clone();

        // Первая успешная запись таблицы шаблонов побеждает
        for entry in PATTERN_TABLE {
            let Some(consumed) = (entry.matcher)(&self.input, self.position) else {
                continue;
            };

            if consumed == 0 {
                // Матчер обязан потреблять хотя бы один символ
                self.state = ScanState::Done;
                return Err(Error::internal(format!(
                    "Pattern '{}' consumed zero characters at offset {}",
                    entry.name, start_position.offset
                )));
            }

            let value: String = self.input[self.position..self.position + consumed]
                .iter()
                .collect();
            let token_type = match entry.action {
                PatternAction::Emit(token_type) => token_type,
                PatternAction::ResolveKeyword => self.profile.resolve(&value),
            };

            self.advance_by(consumed);
            return Ok(Some(Token::new(token_type, value, start_position)));
        }

        // Ни одна запись не подошла
        self.state = ScanState::Done;
        let preview: String = self.input
            [self.position..self.input.len().min(self.position + ERROR_LEXEME_PREVIEW)]
            .iter()
            .collect();
        Err(Error::tokenization(
            format!("No pattern matches input starting with {:?}", preview),
            start_position.offset,
        ))
    }

    /// Возвращает все токены входного текста
    ///
    /// Пробельные токены и комментарии не отбрасываются: поток токенов —
    /// разбиение входа без потерь.
    pub fn tokenize(&mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::with_capacity(TOKEN_BUFFER_CAPACITY);

        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }

        log::debug!(
            "tokenized {} tokens under dialect '{}'",
            tokens.len(),
            self.dialect()
        );
        Ok(tokens)
    }

    // === Вспомогательные методы ===

    /// Продвигает позицию на заданное число символов
    fn advance_by(&mut self, count: usize) {
        for _ in 0..count {
            let ch = self.input[self.position];
            self.position += 1;

            if ch == '\n' {
                self.current_position.line += 1;
                self.current_position.column = 1;
            } else {
                self.current_position.column += 1;
            }
            self.current_position.offset += 1;
        }
    }
}

impl Iterator for Lexer {
    type Item = Result<Token>;

    /// Ленивая выдача токенов; после ошибки или конца входа — `None`
    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Ok(Some(token)) => Some(Ok(token)),
            Ok(None) => None,
            Err(error) => Some(Err(error)),
        }
    }
}
